//! Config command handlers.

use super::exit_codes;
use super::output::{write_output, OutputTarget};
use crate::config::{generate_json_schema, init_config_file, AppConfig, Validatable};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective configuration as YAML.
pub fn run_config_show(config: &AppConfig, loaded_from: Option<&Path>) -> Result<i32> {
    match loaded_from {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file found, showing defaults"),
    }
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    print!("{yaml}");

    for error in config.validate() {
        eprintln!("warning: {error}");
    }
    Ok(exit_codes::SUCCESS)
}

/// Print or write the JSON schema of the config file.
pub fn run_config_schema(output: Option<PathBuf>) -> Result<i32> {
    let schema = generate_json_schema();
    write_output(&schema, &OutputTarget::from_option(output), false)?;
    Ok(exit_codes::SUCCESS)
}

/// Write a commented example config file.
pub fn run_config_init(path: &Path, force: bool) -> Result<i32> {
    init_config_file(path, force)
        .with_context(|| format!("Failed to initialize {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".c2pa-explorer.yaml");
        assert_eq!(run_config_init(&path, false).unwrap(), 0);
        assert!(run_config_init(&path, false).is_err());
        assert_eq!(run_config_init(&path, true).unwrap(), 0);
    }

    #[test]
    fn test_schema_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        run_config_schema(Some(path.clone())).unwrap();
        let schema: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(schema["properties"]["sources"].is_object());
    }
}
