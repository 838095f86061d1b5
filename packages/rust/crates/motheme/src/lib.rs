//! motheme: apply, clear and inspect CSS themes on marimo notebooks, and
//! manage the local theme store.
//!
//! Logging: set `RUST_LOG=motheme=debug` (or pass `--verbose`) to see
//! diagnostics on stderr. User-facing output goes to stdout.

mod commands;
mod reporter;
mod settings;

pub use commands::{
    FileSelection, open_store, run_apply, run_clear, run_create, run_current, run_remove,
    run_themes, run_update,
};
pub use reporter::Reporter;
pub use settings::{Settings, default_settings_path, load_settings, load_settings_from_path};
