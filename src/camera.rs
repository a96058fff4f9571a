use crate::math::*;

/// Distance covered by one movement command.
pub const MOVEMENT_STEP: f64 = 0.5;
/// Angle in radians applied by one rotation command.
pub const ROTATION_STEP: f64 = 0.15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Discrete camera commands coming from the input layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CameraCommand {
    Rotate { pitch: f64, yaw: f64 },
    Move(MoveDirection),
}

/// Wrap into `[0, 2π)`. `rem_euclid` rounds tiny negative inputs up to
/// exactly `TAU`, which is folded back to zero.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Free-flying camera with pitch stored in `angle.x` and yaw in `angle.y`.
///
/// The sines and cosines of both angles are cached and refreshed on every
/// rotation, and both angles are kept in `[0, 2π)`.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    angle: Vec3,
    sin: Vec3,
    cos: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, angle: Vec3) -> Camera {
        let mut camera = Camera {
            position,
            angle: Vec3::new(wrap_angle(angle.x), wrap_angle(angle.y), angle.z),
            sin: Vec3::ZERO,
            cos: Vec3::ZERO,
        };
        camera.update_angle();
        camera
    }

    fn update_angle(&mut self) {
        self.sin = Vec3::new(self.angle.x.sin(), self.angle.y.sin(), 0.0);
        self.cos = Vec3::new(self.angle.x.cos(), self.angle.y.cos(), 0.0);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn angle(&self) -> Vec3 {
        self.angle
    }

    /// World-space unit direction of the ray through screen point `(x, y)`.
    ///
    /// The canonical ray `(x, y, 1)` is pitched about X first, then yawed
    /// about Y.
    pub fn ray_direction(&self, x: f64, y: f64) -> Vec3 {
        let new_y = self.cos.x * y + self.sin.x;
        let z = -self.sin.x * y + self.cos.x;
        let new_x = self.cos.y * x + self.sin.y * z;
        let new_z = -self.sin.y * x + self.cos.y * z;
        Vec3::new(new_x, new_y, new_z).normalized()
    }

    pub fn rotate(&mut self, pitch: f64, yaw: f64) {
        self.angle.x = wrap_angle(self.angle.x + pitch);
        self.angle.y = wrap_angle(self.angle.y + yaw);
        self.update_angle();
    }

    pub fn move_forward(&mut self) {
        let (pitch, yaw) = (self.angle.x, self.angle.y);
        self.position.y += pitch.sin() * MOVEMENT_STEP;
        self.position.x += (yaw + FRAC_PI_2).cos() * pitch.cos() * MOVEMENT_STEP;
        self.position.z += (yaw + FRAC_PI_2).sin() * pitch.cos() * MOVEMENT_STEP;
    }

    pub fn move_backward(&mut self) {
        let (pitch, yaw) = (self.angle.x, self.angle.y);
        self.position.y -= pitch.sin() * MOVEMENT_STEP;
        self.position.x += (yaw - FRAC_PI_2).cos() * pitch.cos() * MOVEMENT_STEP;
        self.position.z += (yaw - FRAC_PI_2).sin() * pitch.cos() * MOVEMENT_STEP;
    }

    // strafing ignores pitch
    pub fn move_left(&mut self) {
        self.position.x -= self.cos.y * MOVEMENT_STEP;
        self.position.z -= self.sin.y * MOVEMENT_STEP;
    }

    pub fn move_right(&mut self) {
        self.position.x += self.cos.y * MOVEMENT_STEP;
        self.position.z += self.sin.y * MOVEMENT_STEP;
    }

    pub fn move_up(&mut self) {
        self.position.y += MOVEMENT_STEP;
    }

    pub fn move_down(&mut self) {
        self.position.y -= MOVEMENT_STEP;
    }

    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Rotate { pitch, yaw } => self.rotate(pitch, yaw),
            CameraCommand::Move(direction) => match direction {
                MoveDirection::Forward => self.move_forward(),
                MoveDirection::Backward => self.move_backward(),
                MoveDirection::Left => self.move_left(),
                MoveDirection::Right => self.move_right(),
                MoveDirection::Up => self.move_up(),
                MoveDirection::Down => self.move_down(),
            },
        }
        debug!(
            "applied {:?}, camera now at {:?} with angle {:?}",
            command, self.position, self.angle
        );
    }
}
