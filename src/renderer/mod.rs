mod film;
mod naive;
#[cfg(feature = "preview")]
mod preview;

pub use film::Film;
pub use naive::NaiveRenderer;
#[cfg(feature = "preview")]
pub use preview::{command_for_key, PreviewRenderer};

use crate::camera::Camera;
use crate::integrator::WhittedIntegrator;
use crate::math::to_rgb8;
use crate::parsing::Config;
use crate::profile::Profile;
use crate::world::World;

use std::fs;
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

/// Camera-space coordinates of a pixel, scaled by the larger image side so
/// pixels stay square. The image center maps to `(0, 0)` and `y` grows upward.
pub fn screen_coordinates(pixel_index: usize, width: usize, height: usize) -> (f64, f64) {
    let size = width.max(height) as f64;
    let row = pixel_index / width;
    let col = pixel_index - width * row;
    (col as f64 / size - 0.5, 0.5 - row as f64 / size)
}

/// Trace every pixel of `film` from `camera`, in parallel.
///
/// Each pixel writes only its own slot, and the call returns once the whole
/// frame is done.
pub fn render_frame(
    integrator: &WhittedIntegrator,
    camera: &Camera,
    film: &mut Film<[u8; 3]>,
) -> Profile {
    let (width, height) = (film.width, film.height);
    let origin = camera.position();
    film.buffer
        .par_iter_mut()
        .enumerate()
        .map(|(pixel_index, pixel_ref)| {
            let mut profile = Profile::default();
            let (x, y) = screen_coordinates(pixel_index, width, height);
            let color = integrator.color(origin, camera.ray_direction(x, y), &mut profile);
            if !color.is_finite() {
                debug!("clamping non-finite color {:?} at pixel {}", color, pixel_index);
            }
            *pixel_ref = to_rgb8(color);
            profile
        })
        .reduce(Profile::default, |a, b| a.combine(b))
}

pub fn output_film(film: &Film<[u8; 3]>, filepath: &Path) -> anyhow::Result<()> {
    if let Some(parent) = filepath.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    film.to_image()
        .save(filepath)
        .with_context(|| format!("failed to write {}", filepath.display()))?;
    info!("wrote {}", filepath.display());
    Ok(())
}

pub trait Renderer {
    fn render(&self, world: World, camera: Camera, config: &Config) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_screen_coordinates() {
        // 4x2 image: size is 4, rows advance by 1/4
        assert_eq!(screen_coordinates(0, 4, 2), (-0.5, 0.5));
        assert_eq!(screen_coordinates(3, 4, 2), (0.25, 0.5));
        assert_eq!(screen_coordinates(6, 4, 2), (0.0, 0.25));
        // tall image: size comes from the height
        assert_eq!(screen_coordinates(1, 2, 4), (-0.25, 0.5));
        assert_eq!(screen_coordinates(7, 2, 4), (-0.25, -0.25));
    }

    #[test]
    fn test_empty_world_renders_white() {
        let integrator = WhittedIntegrator::new(Arc::new(World::empty()), 4);
        let camera = World::default_camera();
        let mut film = Film::new(8, 6, [0u8; 3]);
        let profile = render_frame(&integrator, &camera, &mut film);
        assert!(film.buffer.iter().all(|&p| p == [255, 255, 255]));
        assert_eq!(profile.camera_rays, 48);
    }

    #[test]
    fn test_render_is_idempotent() {
        let integrator = WhittedIntegrator::new(Arc::new(World::default_scene()), 4);
        let camera = World::default_camera();
        let mut first = Film::new(48, 32, [0u8; 3]);
        let mut second = Film::new(48, 32, [7u8; 3]);
        let p1 = render_frame(&integrator, &camera, &mut first);
        let p2 = render_frame(&integrator, &camera, &mut second);
        assert_eq!(first, second);
        assert_eq!(p1, p2);
        assert!(p1.deepest_bounce <= 5);
    }
}
