mod schema;

pub use schema::{Config, SessionConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/admission-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("admission-score"))
}

/// Get the default config file path (~/.config/admission-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                tracing::debug!(
                    path = %default_path.display(),
                    "no config file, using built-in defaults"
                );
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config = read_config(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

/// Validate the whole config at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = match validate_scoring(&config.effective_scoring()) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    let session = config.effective_session();
    if session.max_seminars == 0 {
        errors.push("session.max_seminars: must be at least 1".to_string());
    }
    if session.max_absences < 0 {
        errors.push("session.max_absences: must be non-negative".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Write the default config to `path`, creating parent directories.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let config = Config {
        scoring: Some(Default::default()),
        session: Some(Default::default()),
    };
    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ResultScale;
    use crate::scoring::ScoringConfig;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("admission-score-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scoring:
  colloquium_weight: 0.5
  valid_hours: [30, 60]
session:
  max_seminars: 5
  scale: 10
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.colloquium_weight, 0.5);
        assert_eq!(scoring.valid_hours, vec![30, 60]);

        let session = config.effective_session();
        assert_eq!(session.max_seminars, 5);
        assert_eq!(session.max_absences, 100);
        assert_eq!(session.scale, ResultScale::Ten);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.scoring.is_none());
        assert!(config.session.is_none());
        assert_eq!(config.effective_session(), SessionConfig::default());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let yaml = "session:\n  scale: 20\n";
        let result: std::result::Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let path = temp_path("does-not-exist.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_write_then_load_default_config() {
        let path = temp_path("written/config.yaml");
        let _ = fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let loaded = load_config(Some(path.clone())).unwrap();
        assert_eq!(loaded.effective_scoring(), ScoringConfig::default());
        assert_eq!(loaded.effective_session(), SessionConfig::default());

        // Second write without force must not clobber the file
        assert!(write_default_config(&path, false).is_err());
        assert!(write_default_config(&path, true).is_ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let path = temp_path("broken.yaml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "scoring: [not, a, map]\n").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_config_collects_scoring_and_session_errors() {
        let config = Config {
            scoring: Some(ScoringConfig {
                seminar_weight: -1.0,
                ..Default::default()
            }),
            session: Some(SessionConfig {
                max_seminars: 0,
                ..Default::default()
            }),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("scoring.seminar_weight"));
        assert!(errors[1].contains("session.max_seminars"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
