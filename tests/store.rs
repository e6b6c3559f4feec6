use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::{params, Connection};

use chemistry_lab::db::{
    fetch_random_sample_with, install_store, load_seed, open_store_in, store_path, SAMPLE_CEILING,
};
use chemistry_lab::{
    convert, fetch_by_group, fetch_element, fetch_random_sample, Asset, Family, Phase, Quiz,
    StoreError, TemperatureUnit, Verdict,
};

const SCHEMA: &str = r#"
CREATE TABLE elements (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    symbol TEXT NOT NULL,
    "desc" TEXT NOT NULL,
    state INTEGER NOT NULL,
    melting REAL,
    boiling REAL,
    colors TEXT,
    image TEXT,
    "groups" INTEGER NOT NULL,
    family TEXT NOT NULL,
    mass REAL NOT NULL
);
"#;

fn seeded() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    load_seed(&conn).unwrap();
    conn
}

/// Write a store file holding only the given rows and reopen it read-only.
fn custom_store(dir: &Path, rows: &[(i64, &str, i64, Option<f64>, Option<f64>, &str)]) -> Connection {
    {
        let conn = Connection::open(store_path(dir, "chem")).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        for (id, name, state, melting, boiling, family) in rows {
            conn.execute(
                r#"INSERT INTO elements (id, name, symbol, "desc", state, melting, boiling,
                    colors, image, "groups", family, mass)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, NULL, 1, ?8, 1.0)"#,
                params![
                    id,
                    name,
                    &name[..1],
                    format!("{name} is an element."),
                    state,
                    melting,
                    boiling,
                    family
                ],
            )
            .unwrap();
        }
    }
    open_store_in(dir, "chem").unwrap()
}

#[test]
fn every_group_is_filtered_exactly() {
    let conn = seeded();
    let mut total = 0;
    for group in 1..=20 {
        let elements = fetch_by_group(&conn, group).unwrap();
        assert!(!elements.is_empty(), "group {group} is empty");
        assert!(elements.iter().all(|e| e.group == group));
        total += elements.len();
    }
    assert_eq!(total, 118);
    assert_eq!(fetch_by_group(&conn, 19).unwrap().len(), 15);
    assert_eq!(fetch_by_group(&conn, 20).unwrap().len(), 15);
    assert!(fetch_by_group(&conn, 21).unwrap().is_empty());
}

#[test]
fn f_block_rows_keep_storage_order() {
    let conn = seeded();
    let lanthanides = fetch_by_group(&conn, 19).unwrap();
    assert_eq!(lanthanides.first().unwrap().name, "Lanthanum");
    assert_eq!(lanthanides.last().unwrap().name, "Lutetium");
    assert!(lanthanides.iter().all(|e| e.family == Family::Lanthanide));
}

#[test]
fn samples_are_distinct_and_capped() {
    let conn = seeded();
    let mut rng = StdRng::seed_from_u64(42);
    for count in [1, 4, 20, 94] {
        let sample = fetch_random_sample_with(&conn, count, &mut rng).unwrap();
        assert_eq!(sample.len(), count);
        let ids: HashSet<i64> = sample.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), count);
        assert!(ids.iter().all(|id| (1..=SAMPLE_CEILING).contains(id)));
    }

    let sample = fetch_random_sample(&conn, 4).unwrap();
    assert_eq!(sample.len(), 4);
}

#[test]
fn oversized_sample_is_rejected() {
    let conn = seeded();
    let err = fetch_random_sample(&conn, 95).unwrap_err();
    assert!(matches!(err, StoreError::SampleTooLarge { requested: 95, .. }));
}

#[test]
fn zero_and_null_temperatures_are_absent() {
    let conn = seeded();

    let oganesson = fetch_element(&conn, 118).unwrap().unwrap();
    assert_eq!(oganesson.melting, None);
    assert_eq!(oganesson.boiling, None);
    assert_eq!(oganesson.state, Phase::Unknown);
    assert!(!oganesson.has_temperatures());

    let mercury = fetch_element(&conn, 80).unwrap().unwrap();
    assert_eq!(mercury.melting, Some(-38.83));
    assert_eq!(mercury.state, Phase::Liquid);
    assert_eq!(convert(TemperatureUnit::Celsius, mercury.melting.unwrap()), "-38.83 °C");
}

#[test]
fn hydrogen_without_melting_point() {
    let dir = tempfile::tempdir().unwrap();
    let conn = custom_store(
        dir.path(),
        &[(1, "Hydrogen", 2, None, Some(-252.87), "Nonmetal")],
    );

    let group = fetch_by_group(&conn, 1).unwrap();
    assert_eq!(group.len(), 1);
    let hydrogen = &group[0];
    assert_eq!(hydrogen.name, "Hydrogen");
    assert_eq!(hydrogen.state, Phase::Gas);
    assert_eq!(hydrogen.melting, None);
    assert_eq!(hydrogen.boiling, Some(-252.87));
    assert_eq!(hydrogen.image, None);
    assert_eq!(hydrogen.tint(), None);
}

#[test]
fn unknown_family_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let conn = custom_store(dir.path(), &[(9, "Fluorine", 2, Some(-219.67), None, "Halogen")]);
    let err = fetch_by_group(&conn, 1).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn unknown_phase_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let conn = custom_store(dir.path(), &[(1, "Hydrogen", 7, None, None, "Nonmetal")]);
    let err = fetch_element(&conn, 1).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn missing_store_opens_as_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_store_in(dir.path(), "chem").is_none());
    assert!(open_store_in(dir.path(), "does-not-exist").is_none());
}

#[test]
fn installed_store_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    install_store(dir.path(), "chem").unwrap();
    let conn = open_store_in(dir.path(), "chem").unwrap();

    let gold = fetch_element(&conn, 79).unwrap().unwrap();
    assert_eq!(gold.image, Some(Asset::Model("gold.usdz".into())));
    assert!(conn
        .execute("DELETE FROM elements WHERE id = 79", [])
        .is_err());
}

#[test]
fn quiz_from_store_hides_the_answer() {
    let conn = seeded();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut quiz = Quiz::from_store(&conn, &mut rng).unwrap();

    assert_eq!(quiz.choices().len(), 4);
    let answer = quiz.answer().name.clone();
    assert!(!quiz.prompt().to_lowercase().contains(&answer.to_lowercase()));

    let index = quiz.choices().iter().position(|e| e.name == answer).unwrap();
    assert_eq!(quiz.choose(index), Some(Verdict::Correct));
}

#[test]
fn quiz_needs_at_least_two_elements() {
    let dir = tempfile::tempdir().unwrap();
    // Only one element inside the sampling range.
    let conn = custom_store(dir.path(), &[(1, "Hydrogen", 2, None, None, "Nonmetal")]);
    let mut rng = StdRng::seed_from_u64(1);
    match Quiz::from_store(&conn, &mut rng) {
        Err(StoreError::NotEnoughData { wanted: 4, found }) => assert!(found < 2),
        other => panic!("expected NotEnoughData, got {other:?}"),
    }
}
