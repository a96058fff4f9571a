pub use crate::camera::{Camera, CameraCommand, MoveDirection};
pub use crate::geometry::{ChessPlane, Cylinder, GeometryPlane, Shape, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::WhittedIntegrator;
pub use crate::light::{Light, LightKind};
pub use crate::material::Material;
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::world::World;
