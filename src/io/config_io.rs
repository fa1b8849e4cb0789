use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// File name looked up in the working directory when no --config is given
pub const CONFIG_FILE_NAME: &str = "actionlist.toml";

/// Error type for loading configuration and item files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not open log file {path}: {source}")]
    LogFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `actionlist.toml` in `cwd` is
/// used when present and the built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AppConfig, LoadError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(AppConfig::default());
            }
            candidate
        }
    };
    read_config(&path)
}

/// Read and validate one config file
pub fn read_config(path: &Path) -> Result<AppConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|e| LoadError::ConfigParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), LoadError> {
    if config.undo.window_ms == 0 {
        return Err(LoadError::InvalidConfig(
            "undo.window_ms must be greater than zero".into(),
        ));
    }
    if config.menus.single.is_empty() {
        return Err(LoadError::InvalidConfig("menus.single is empty".into()));
    }
    if config.menus.multiple.is_empty() {
        return Err(LoadError::InvalidConfig("menus.multiple is empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionId, UndoMode};
    use tempfile::TempDir;

    #[test]
    fn missing_default_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.list.initial_count, 100);
    }

    #[test]
    fn picks_up_file_in_cwd() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[list]\ninitial_count = 7\n\n[undo]\nmode = \"single\"\n",
        )
        .unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.list.initial_count, 7);
        assert_eq!(config.undo.mode, UndoMode::Single);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::ReadError { .. }));
    }

    #[test]
    fn parse_error_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[undo\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn zero_window_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.toml");
        fs::write(&path, "[undo]\nwindow_ms = 0\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: undo.window_ms must be greater than zero"
        );
    }

    #[test]
    fn empty_menu_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.toml");
        fs::write(&path, "[menus]\nsingle = []\n").unwrap();
        assert!(matches!(
            read_config(&path).unwrap_err(),
            LoadError::InvalidConfig(_)
        ));
    }

    #[test]
    fn custom_menus_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.toml");
        fs::write(&path, "[menus]\nsingle = [\"delete\"]\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.menus.single, vec![ActionId::Delete]);
    }
}
