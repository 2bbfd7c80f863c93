//! Command handlers - kept out of main.rs for testability

pub mod config;
pub mod merge;

pub use config::{
    execute_config, render_settings_json, render_settings_text, resolve_settings,
    ResolvedSettings, SettingsSource,
};
pub use merge::execute_merge;
