//! Binary entry point: resolve settings, start file logging, make sure the
//! element store is installed, then hand over to the TUI.
use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::info;

use chemistry_lab::{install_store, run_app, App, Palette, Settings};

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings);

    let store = install_store(&settings.data_dir, &settings.store_name)
        .context("failed to install the element store")?;
    info!("using element store at {}", store.display());

    let mut app = App::new(settings, Palette::default());
    run_app(&mut app)
}

/// Send log records to a file in the data directory so they never land on
/// the alternate screen. If the file cannot be opened the app runs unlogged.
fn init_logging(settings: &Settings) {
    if fs::create_dir_all(&settings.data_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(settings.log_path())
    else {
        return;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
}
