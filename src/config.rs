use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::http_client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Configuration file structure that mirrors CLI arguments
/// All fields are optional to allow partial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format: text or json
    pub output: Option<String>,

    /// Save the JSON report to file
    pub save: Option<String>,

    /// Verbose output
    pub verbose: Option<bool>,

    /// Timeout for fetching the page, in seconds
    pub timeout: Option<u64>,

    /// User agent sent when fetching the page
    pub user_agent: Option<String>,

    /// Address to serve the analysis API on
    pub serve: Option<String>,
}

/// Configuration file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Get the default configuration file paths to check (in order of priority)
    /// Returns paths in order: current directory, user config directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
            for ext in format.extensions() {
                paths.push(PathBuf::from(format!("metascout.{}", ext)));
            }
        }

        // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            let config_dir = config_home.join("metascout");
            for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
                for ext in format.extensions() {
                    paths.push(config_dir.join(format!("config.{}", ext)));
                }
            }
        }

        paths
    }

    /// Try to load configuration from default paths
    /// Returns the first configuration file found, or None if no config exists
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config file");
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Merge this configuration with CLI arguments
    /// CLI arguments take precedence over config file values
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            url: cli.url.clone(),
            output: if cli.output != "text" {
                cli.output.clone()
            } else {
                self.output.clone().unwrap_or_else(|| cli.output.clone())
            },
            save: cli.save.clone().or_else(|| self.save.clone()),
            verbose: if cli.verbose {
                cli.verbose
            } else {
                self.verbose.unwrap_or(cli.verbose)
            },
            timeout: if cli.timeout != DEFAULT_TIMEOUT_SECS {
                cli.timeout
            } else {
                self.timeout.unwrap_or(cli.timeout)
            },
            user_agent: if cli.user_agent != DEFAULT_USER_AGENT {
                cli.user_agent.clone()
            } else {
                self.user_agent
                    .clone()
                    .unwrap_or_else(|| cli.user_agent.clone())
            },
            serve: cli.serve.clone().or_else(|| self.serve.clone()),
            config: cli.config.clone(),
        }
    }

    /// Applies the explicit `--config` file, or the first default config found
    pub fn resolve(cli: Cli) -> Result<Cli> {
        let config = match &cli.config {
            Some(path) => Some(Self::from_file(Path::new(path))?),
            None => Self::from_default_paths()?,
        };

        Ok(match config {
            Some(config) => config.merge_with_cli(&cli),
            None => cli,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::NamedTempFile;

    fn default_cli() -> Cli {
        Cli {
            url: Some("https://example.com".to_string()),
            output: "text".to_string(),
            save: None,
            verbose: false,
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            serve: None,
            config: None,
        }
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("config.txt")), None);
    }

    #[test]
    fn test_load_json_config() {
        let json_content = r#"
{
    "output": "json",
    "verbose": true,
    "timeout": 10,
    "user_agent": "TestBot/2.0"
}
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("json");
        fs::write(&temp_path, json_content).unwrap();

        let config = Config::from_file(&temp_path).unwrap();
        assert_eq!(config.output, Some("json".to_string()));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.user_agent, Some("TestBot/2.0".to_string()));
        assert_eq!(config.serve, None);

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_load_toml_config() {
        let toml_content = r#"
output = "json"
timeout = 5
serve = "127.0.0.1:8080"
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("toml");
        fs::write(&temp_path, toml_content).unwrap();

        let config = Config::from_file(&temp_path).unwrap();
        assert_eq!(config.output, Some("json".to_string()));
        assert_eq!(config.timeout, Some(5));
        assert_eq!(config.serve, Some("127.0.0.1:8080".to_string()));

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_load_yaml_config() {
        let yaml_content = r#"
save: "report.json"
verbose: true
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("yml");
        fs::write(&temp_path, yaml_content).unwrap();

        let config = Config::from_file(&temp_path).unwrap();
        assert_eq!(config.save, Some("report.json".to_string()));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.output, None);

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_invalid_configs_are_errors() {
        for (ext, content) in [
            ("json", r#"{ invalid json }"#),
            ("toml", r#"[[[ invalid toml"#),
            ("yaml", "save: \"unterminated\n  timeout: nope"),
        ] {
            let temp_file = NamedTempFile::new().unwrap();
            let temp_path = temp_file.path().with_extension(ext);
            fs::write(&temp_path, content).unwrap();

            assert!(Config::from_file(&temp_path).is_err(), "{} should fail", ext);

            fs::remove_file(temp_path).ok();
        }
    }

    #[test]
    fn test_unsupported_format() {
        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("txt");
        fs::write(&temp_path, "content").unwrap();

        let result = Config::from_file(&temp_path);
        assert!(result.is_err());

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_merge_with_cli_defaults() {
        let config = Config {
            output: Some("json".to_string()),
            timeout: Some(10),
            user_agent: Some("TestBot/2.0".to_string()),
            save: Some("out.json".to_string()),
            ..Default::default()
        };

        let merged = config.merge_with_cli(&default_cli());
        assert_eq!(merged.url, Some("https://example.com".to_string()));
        assert_eq!(merged.output, "json");
        assert_eq!(merged.timeout, 10);
        assert_eq!(merged.user_agent, "TestBot/2.0");
        assert_eq!(merged.save, Some("out.json".to_string()));
        assert!(!merged.verbose);
    }

    #[test]
    fn test_merge_with_cli_overrides() {
        let config = Config {
            output: Some("json".to_string()),
            timeout: Some(10),
            verbose: Some(false),
            serve: Some("0.0.0.0:9000".to_string()),
            ..Default::default()
        };

        let cli = Cli {
            output: "text".to_string(),
            timeout: 3,
            verbose: true,
            serve: Some("127.0.0.1:8080".to_string()),
            ..default_cli()
        };

        let merged = config.merge_with_cli(&cli);
        assert_eq!(merged.output, "json"); // "text" is the CLI default
        assert_eq!(merged.timeout, 3); // CLI override
        assert!(merged.verbose); // CLI value
        assert_eq!(merged.serve, Some("127.0.0.1:8080".to_string())); // CLI override
    }

    #[test]
    fn test_resolve_with_explicit_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("json");
        fs::write(&temp_path, r#"{"output": "json"}"#).unwrap();

        let cli = Cli {
            config: Some(temp_path.to_string_lossy().to_string()),
            ..default_cli()
        };

        let resolved = Config::resolve(cli).unwrap();
        assert_eq!(resolved.output, "json");

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_resolve_with_missing_explicit_config() {
        let cli = Cli {
            config: Some("/definitely/not/here/metascout.json".to_string()),
            ..default_cli()
        };

        let error = Config::resolve(cli).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_default_paths_exists() {
        let paths = Config::default_paths();
        assert!(!paths.is_empty());

        for name in ["metascout.json", "metascout.toml", "metascout.yaml"] {
            assert!(paths.iter().any(|p| p.to_string_lossy().contains(name)));
        }
    }

    #[test]
    #[serial]
    fn test_default_paths_with_xdg_config_home() {
        use std::env;

        let custom_config = "/custom/config/path";
        unsafe {
            env::set_var("XDG_CONFIG_HOME", custom_config);
        }

        let paths = Config::default_paths();
        assert!(
            paths
                .iter()
                .any(|p| p.to_string_lossy().contains("/custom/config/path/metascout"))
        );

        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_from_default_paths_priority_order() {
        use std::env;
        use tempfile::tempdir;

        let temp_dir = tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp_dir.path()).unwrap();

        let temp_config_dir = tempdir().unwrap();
        let config_dir = temp_config_dir.path().join("metascout");
        fs::create_dir_all(&config_dir).unwrap();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_config_dir.path());
        }

        fs::write(temp_dir.path().join("metascout.json"), r#"{"timeout": 5}"#).unwrap();
        fs::write(config_dir.join("config.toml"), "timeout = 20").unwrap();

        let config = Config::from_default_paths().unwrap().unwrap();
        assert_eq!(config.timeout, Some(5)); // current dir wins

        env::set_current_dir(&original_dir).ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_from_default_paths_finds_config_dir_config() {
        use std::env;
        use tempfile::tempdir;

        let temp_cwd = tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp_cwd.path()).unwrap();

        let temp_config_dir = tempdir().unwrap();
        let config_dir = temp_config_dir.path().join("metascout");
        fs::create_dir_all(&config_dir).unwrap();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_config_dir.path());
        }

        fs::write(config_dir.join("config.yaml"), "timeout: 15").unwrap();

        let config = Config::from_default_paths().unwrap().unwrap();
        assert_eq!(config.timeout, Some(15));

        env::set_current_dir(&original_dir).ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_from_default_paths_returns_none_when_no_config_exists() {
        use std::env;
        use tempfile::tempdir;

        let temp_dir = tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp_dir.path()).unwrap();

        let temp_config_dir = tempdir().unwrap();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_config_dir.path());
        }

        let result = Config::from_default_paths();
        assert!(result.unwrap().is_none());

        env::set_current_dir(&original_dir).ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }
}
