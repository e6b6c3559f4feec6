//! ChemistryLab: a terminal periodic table backed by a bundled, read-only
//! SQLite store of the 118 elements, plus a "name that element" quiz.
//!
//! The binary only wires settings, logging and the store bootstrap together;
//! everything reusable lives behind the modules below.
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod units;

pub use config::Settings;
pub use db::{
    fetch_by_group, fetch_element, fetch_random_sample, install_store, open_store, open_store_in,
};
pub use error::StoreError;
pub use models::{Asset, Element, Family, Phase, Tint};
pub use quiz::{Quiz, Verdict};
pub use ui::{run_app, App, Palette};
pub use units::{convert, convert_selector, TemperatureUnit};
