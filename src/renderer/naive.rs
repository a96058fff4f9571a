use super::{output_film, render_frame, Film, Renderer};

use crate::camera::Camera;
use crate::integrator::WhittedIntegrator;
use crate::parsing::{Config, Resolution};
use crate::world::World;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Renders a single frame from the initial camera and writes it as a PNG.
pub struct NaiveRenderer {
    output_dir: PathBuf,
}

impl NaiveRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> NaiveRenderer {
        NaiveRenderer {
            output_dir: output_dir.into(),
        }
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, camera: Camera, config: &Config) -> anyhow::Result<()> {
        let settings = &config.render_settings;
        let Resolution { width, height } = settings.resolution;
        info!("starting render with film resolution {}x{}", width, height);

        let integrator = WhittedIntegrator::new(Arc::new(world), settings.max_depth);
        let mut film = Film::new(width, height, [0u8; 3]);

        let now = Instant::now();
        let stats = render_frame(&integrator, &camera, &mut film);
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, settings.threads as usize);

        let filepath = self
            .output_dir
            .join(format!("{}.png", settings.filename));
        output_film(&film, &filepath)
    }
}
