use clap::Args;
use colored::Colorize;
use cyclops_core::{CyclopsConfig, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

pub struct ConfigGenerator;

impl ConfigGenerator {
    pub fn generate_default_config() -> CyclopsConfig {
        CyclopsConfig::default()
    }
}

pub struct FileWriter;

impl FileWriter {
    pub fn config_exists(path: &Path) -> bool {
        path.join(CONFIG_FILE_NAME).exists()
    }

    pub fn write_config(config: &CyclopsConfig, path: &Path) -> anyhow::Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);
        let toml_string = config.to_toml_string()?;
        fs::write(&config_path, toml_string)?;
        Ok(config_path)
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn display_success(config_path: &Path) {
        println!("{} Configuration file created successfully!", "✓".green());
        println!("   Location: {}", config_path.display());
    }

    pub fn display_existing_file_warning() {
        eprintln!(
            "{} Configuration file already exists: {}",
            "⚠".yellow(),
            CONFIG_FILE_NAME
        );
        eprintln!("   Use --force to overwrite the existing configuration");
    }

    pub fn display_error(error: &anyhow::Error) {
        eprintln!("{} Failed to create configuration file", "✗".red());
        eprintln!("   Error: {}", error);
    }
}

pub fn exec(args: InitArgs) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir()?;
    if exec_in(&args, &current_dir)?.is_none() {
        std::process::exit(1);
    }
    Ok(())
}

/// Writes the default configuration into `dir`. Returns `None` when a
/// configuration already exists and `--force` was not given.
pub fn exec_in(args: &InitArgs, dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    if FileWriter::config_exists(dir) && !args.force {
        OutputFormatter::display_existing_file_warning();
        return Ok(None);
    }

    let config = ConfigGenerator::generate_default_config();

    match FileWriter::write_config(&config, dir) {
        Ok(config_path) => {
            OutputFormatter::display_success(&config_path);
            Ok(Some(config_path))
        }
        Err(e) => {
            OutputFormatter::display_error(&e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_default_config() {
        let config = ConfigGenerator::generate_default_config();

        assert_eq!(config.ignore_paths, vec!["target", ".git"]);
        assert!(config.cyclomatic_complexity.enabled);
        assert_eq!(config.cyclomatic_complexity.max, 6);
        assert!(config.cyclomatic_complexity.allowed_methods.is_empty());
        assert!(config.cyclomatic_complexity.allowed_patterns.is_empty());
        assert!(config.ascii_identifiers.enabled);
    }

    #[test]
    fn test_written_config_matches_documented_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = exec_in(&InitArgs { force: false }, temp_dir.path())
            .unwrap()
            .unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        let parsed = CyclopsConfig::from_toml_str(&content).unwrap();
        assert_eq!(parsed, CyclopsConfig::default());
        assert!(content.contains("allowed_patterns = []"));
    }

    #[test]
    fn test_config_exists_returns_false_when_no_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!FileWriter::config_exists(temp_dir.path()));
    }

    #[test]
    fn test_config_exists_returns_true_when_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "test content").unwrap();
        assert!(FileWriter::config_exists(temp_dir.path()));
    }

    #[test]
    fn test_write_config_creates_parseable_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigGenerator::generate_default_config();

        let config_path = FileWriter::write_config(&config, temp_dir.path()).unwrap();
        assert_eq!(config_path, temp_dir.path().join(CONFIG_FILE_NAME));

        let content = fs::read_to_string(&config_path).unwrap();
        let parsed = CyclopsConfig::from_toml_str(&content).expect("Generated TOML should be parseable");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_exec_in_creates_config() {
        let temp_dir = TempDir::new().unwrap();
        let args = InitArgs { force: false };

        let created = exec_in(&args, temp_dir.path()).unwrap();
        assert_eq!(created, Some(temp_dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_exec_in_keeps_existing_file_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "existing content").unwrap();

        let created = exec_in(&InitArgs { force: false }, temp_dir.path()).unwrap();

        assert!(created.is_none());
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content", "File should not be modified");
    }

    #[test]
    fn test_exec_in_with_force_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "existing content").unwrap();

        let created = exec_in(&InitArgs { force: true }, temp_dir.path()).unwrap();

        assert!(created.is_some());
        let content = fs::read_to_string(&config_path).unwrap();
        assert_ne!(content, "existing content", "File should be overwritten");
        assert!(content.contains("[cyclomatic_complexity]"), "Should contain default config");
    }
}
