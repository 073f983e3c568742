use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

pub const DEFAULT_CONFIG: &str = r#"# array-utils configuration

[demo]
numbers = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]
words = ["apple", "banana", "apple", "cherry", "banana"]
chunk_size = 3

[output]
# auto | always | never
color = "auto"
"#;

/// Write the default config to `config_path`.
pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote {}", config_path.display());

    Ok(())
}

/// Write the default config into `dir`, returning the path written.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    Ok(config_path)
}

/// Write to `target` when given, else `.array-utils.toml` in the current directory.
pub fn init_config(target: Option<&Path>, force: bool) -> Result<()> {
    let written = match target {
        Some(path) => {
            write_default_config(path, force)?;
            path.to_path_buf()
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            init_config_in(&cwd, force)?
        }
    };
    println!("Created {} configuration file", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, ArrayUtilsConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, ArrayUtilsConfig::default());
    }

    #[test]
    fn test_init_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = init_config_in(temp_dir.path(), false).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[demo]\n").unwrap();

        let err = init_config_in(temp_dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[demo]\n");

        init_config_in(temp_dir.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_honors_explicit_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("custom.toml");

        init_config(Some(&target), false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), DEFAULT_CONFIG);
        assert!(!temp_dir.path().join(CONFIG_FILE_NAME).exists());

        let err = init_config(Some(&target), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
