pub mod config;

pub use config::{Config, RenderSettings, RendererType, Resolution, TOMLConfig};

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Parse a render configuration from TOML text, resolving defaults.
pub fn parse_config(input: &str) -> anyhow::Result<Config> {
    let data: TOMLConfig = toml::from_str(input).context("malformed render configuration")?;
    Ok(data.into())
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let filepath = filepath.as_ref();
    info!("loading config file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read config file {}", filepath.display()))?;
    let config = parse_config(&input)
        .with_context(|| format!("failed to parse config file {}", filepath.display()))?;
    let settings = &config.render_settings;
    info!(
        "loaded config: {:?} renderer, {}x{}, max depth {}, {} threads",
        config.renderer,
        settings.resolution.width,
        settings.resolution.height,
        settings.max_depth,
        settings.threads
    );
    Ok(config)
}
