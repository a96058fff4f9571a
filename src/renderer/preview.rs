use super::{render_frame, Film, Renderer};

use crate::camera::{Camera, CameraCommand, MoveDirection, ROTATION_STEP};
use crate::integrator::WhittedIntegrator;
use crate::parsing::{Config, Resolution};
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

/// Camera command bound to a key, if any.
pub fn command_for_key(key: Key) -> Option<CameraCommand> {
    let command = match key {
        Key::W => CameraCommand::Move(MoveDirection::Forward),
        Key::S => CameraCommand::Move(MoveDirection::Backward),
        Key::A => CameraCommand::Move(MoveDirection::Left),
        Key::D => CameraCommand::Move(MoveDirection::Right),
        Key::E => CameraCommand::Move(MoveDirection::Up),
        Key::Q => CameraCommand::Move(MoveDirection::Down),
        Key::Up => CameraCommand::Rotate {
            pitch: ROTATION_STEP,
            yaw: 0.0,
        },
        Key::Down => CameraCommand::Rotate {
            pitch: -ROTATION_STEP,
            yaw: 0.0,
        },
        Key::Left => CameraCommand::Rotate {
            pitch: 0.0,
            yaw: -ROTATION_STEP,
        },
        Key::Right => CameraCommand::Rotate {
            pitch: 0.0,
            yaw: ROTATION_STEP,
        },
        _ => return None,
    };
    Some(command)
}

/// Interactive window. Every key bound to a camera command re-renders the
/// whole frame before the next key is handled.
#[derive(Default)]
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

fn present(window: &mut Window, film: &Film<[u8; 3]>, buffer: &mut [u32]) -> anyhow::Result<()> {
    film.write_to_u32_buffer(buffer);
    window
        .update_with_buffer(buffer, film.width, film.height)
        .map_err(|e| anyhow!("failed to update preview window: {}", e))
}

impl Renderer for PreviewRenderer {
    fn render(&self, world: World, mut camera: Camera, config: &Config) -> anyhow::Result<()> {
        let settings = &config.render_settings;
        let Resolution { width, height } = settings.resolution;
        let integrator = WhittedIntegrator::new(Arc::new(world), settings.max_depth);

        let mut window = Window::new(
            "Whitted Preview",
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| anyhow!("failed to open preview window: {}", e))?;
        // Limit to max ~60 fps update rate
        window.set_target_fps(60);

        let mut film = Film::new(width, height, [0u8; 3]);
        let mut buffer = vec![0u32; width * height];
        let mut frames = 0usize;
        let mut total = Profile::default();
        let mut render_seconds = 0.0f32;

        let mut draw = |camera: &Camera, window: &mut Window| -> anyhow::Result<()> {
            let now = Instant::now();
            let profile = render_frame(&integrator, camera, &mut film);
            let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
            info!(
                "frame {} took {}s, {} rays",
                frames,
                elapsed,
                profile.total_rays()
            );
            frames += 1;
            render_seconds += elapsed;
            total = total.combine(profile);
            present(window, &film, &mut buffer)
        };

        draw(&camera, &mut window)?;
        while window.is_open() && !window.is_key_down(Key::Escape) {
            let commands: Vec<CameraCommand> = window
                .get_keys_pressed(KeyRepeat::Yes)
                .into_iter()
                .filter_map(command_for_key)
                .collect();
            if commands.is_empty() {
                window.update();
                continue;
            }
            for command in commands {
                camera.apply(command);
                draw(&camera, &mut window)?;
            }
        }
        info!("closing preview after {} frames", frames);
        total.pretty_print(render_seconds, settings.threads as usize);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            command_for_key(Key::W),
            Some(CameraCommand::Move(MoveDirection::Forward))
        );
        assert_eq!(
            command_for_key(Key::Q),
            Some(CameraCommand::Move(MoveDirection::Down))
        );
        assert_eq!(
            command_for_key(Key::Left),
            Some(CameraCommand::Rotate {
                pitch: 0.0,
                yaw: -ROTATION_STEP
            })
        );
        assert_eq!(command_for_key(Key::Space), None);
    }
}
