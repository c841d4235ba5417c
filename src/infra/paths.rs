// src/infra/paths.rs — Path management
//
// All paths respect the WELLMATE_HOME environment variable for isolation.
// When WELLMATE_HOME is set, config and data live under that directory.
// When unset, config uses ~/.wellmate/ and data uses XDG_DATA_HOME/wellmate.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the WELLMATE_HOME override, if set.
fn wellmate_home() -> Option<PathBuf> {
    std::env::var_os("WELLMATE_HOME").map(PathBuf::from)
}

/// Home directory, or the working directory when none can be determined.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $WELLMATE_HOME/ or ~/.wellmate/
pub fn config_dir() -> PathBuf {
    if let Some(home) = wellmate_home() {
        return home;
    }
    dirs_home().join(".wellmate")
}

/// Data directory: $WELLMATE_HOME/data/ or ~/.local/share/wellmate/
pub fn data_dir() -> PathBuf {
    if let Some(home) = wellmate_home() {
        return home.join("data");
    }
    ProjectDirs::from("", "", "wellmate")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| config_dir().join("data"))
}

/// Session store database path
pub fn db_path() -> PathBuf {
    data_dir().join("wellmate.db")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Ensure all required directories exist
pub fn ensure_dirs() -> std::io::Result<()> {
    for dir in [config_dir(), data_dir()] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
