use std::path::{Path, PathBuf};

/// Startup settings: the data root holding `save/`, `log/`, and an optional
/// `world.yaml`, plus the save file name inside `save/`.
#[derive(Debug)]
pub struct AppConfig {
    pub root: PathBuf,
    pub save_file: String,
}

impl AppConfig {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() < 2 {
            return Err("usage: adventure <data-root> [save-file]".to_string());
        }

        let root = Path::new(&args[1]).to_path_buf();
        let save_file = if args.len() > 2 {
            args[2].clone()
        } else {
            std::env::var("ADVENTURE_SAVE_FILE")
                .ok()
                .and_then(|value| {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .unwrap_or_else(|| crate::persistence::store::DEFAULT_SAVE_FILE.to_string())
        };

        Ok(Self { root, save_file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn missing_root_is_a_usage_error() {
        let err = AppConfig::from_args(&args(&["adventure"])).expect_err("usage");
        assert!(err.starts_with("usage:"));
    }

    #[test]
    fn save_file_defaults_when_not_given() {
        let config = AppConfig::from_args(&args(&["adventure", "/tmp/data"])).expect("config");
        assert_eq!(config.root, Path::new("/tmp/data"));
        assert_eq!(config.save_file, "player.xml");
    }

    #[test]
    fn save_file_argument_overrides_the_default() {
        let config =
            AppConfig::from_args(&args(&["adventure", "/tmp/data", "slot2.xml"])).expect("config");
        assert_eq!(config.save_file, "slot2.xml");
    }
}
