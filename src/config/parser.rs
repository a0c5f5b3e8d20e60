use crate::config::types::{Config, ConfigOverrides, CrawlConfig, OutputConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use page_gleaner::config::load_config;
///
/// let config = load_config(Path::new("gleaner.toml")).unwrap();
/// println!("Output: {}", config.output.path.display());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;
    validate(&config)?;
    Ok(config)
}

/// Parses and validates configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Builds the effective configuration from an optional file and overrides
///
/// Overrides are applied after the file is read and before validation, so
/// a file may leave out values the command line supplies. Without a file,
/// both the seed URL and the output path must come from `overrides`.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => Config {
            crawl: CrawlConfig {
                seed_url: overrides
                    .seed_url
                    .clone()
                    .ok_or_else(|| ConfigError::Missing("seed URL".to_string()))?,
                user_agent: None,
            },
            output: OutputConfig {
                path: overrides
                    .output_path
                    .clone()
                    .ok_or_else(|| ConfigError::Missing("output path".to_string()))?,
                format: None,
            },
        },
    };

    overrides.apply(&mut config);
    validate(&config)?;

    Ok(config)
}

/// Reads and parses a file without validating it
fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
