//! Exercises store resolution through the default data directory. Kept in its
//! own test binary because it sets process environment variables.

use std::env;

use chemistry_lab::{fetch_by_group, install_store, open_store};

#[test]
fn open_store_resolves_the_configured_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    env::set_var("CHEMLAB_DATA_DIR", dir.path());
    install_store(dir.path(), "chem").unwrap();

    let conn = open_store("chem").expect("store should open from CHEMLAB_DATA_DIR");
    let group = fetch_by_group(&conn, 1).unwrap();
    let hydrogen = group
        .iter()
        .find(|element| element.name == "Hydrogen")
        .expect("hydrogen in group 1");
    assert_eq!(hydrogen.id, 1);
    assert_eq!(hydrogen.symbol, "H");

    assert!(open_store("missing").is_none());
}
