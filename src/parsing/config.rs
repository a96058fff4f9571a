use serde::Deserialize;

pub const DEFAULT_MAX_DEPTH: u8 = 4;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 720,
            height: 480,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Preview,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    #[serde(default)]
    pub resolution: Resolution,
    pub max_depth: Option<u8>,
    pub threads: Option<u16>,
}

/// Render settings with every default resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub resolution: Resolution,
    pub max_depth: u8,
    pub threads: u16,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename.unwrap_or_else(|| String::from("whitted")),
            resolution: data.resolution,
            max_depth: data.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            threads: data
                .threads
                .unwrap_or_else(|| num_cpus::get().min(u16::MAX as usize) as u16),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub renderer: RendererType,
    #[serde(default)]
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            renderer: data.renderer,
            render_settings: data.render_settings.into(),
        }
    }
}
