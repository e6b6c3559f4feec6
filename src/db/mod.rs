//! Read-only access to the bundled element store, split across logical
//! submodules.

mod connection;
mod elements;
mod seed;

pub use connection::{open_store, open_store_in, store_path};
pub use elements::{
    draw_distinct_ids, fetch_by_group, fetch_element, fetch_random_sample,
    fetch_random_sample_with, map_row, SAMPLE_CEILING,
};
pub use seed::{install_store, load_seed, SEED_SQL};
