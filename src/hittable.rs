use crate::geometry::Shape;
use crate::material::Material;
use crate::math::*;

pub struct HitRecord<'a> {
    pub time: f64,
    pub point: Vec3,
    pub normal: Vec3,
    pub shape: &'a Shape,
}

impl<'a> HitRecord<'a> {
    pub fn new(time: f64, point: Vec3, normal: Vec3, shape: &'a Shape) -> Self {
        HitRecord {
            time,
            point,
            normal: normal.normalized(),
            shape,
        }
    }
}

pub trait Hittable {
    /// Smallest `t > EPSILON` such that `origin + direction * t` lies on the
    /// surface. `direction` is expected to be unit length.
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64>;
    /// Outward unit normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;
    fn material(&self) -> &Material;
    fn color(&self, _point: Vec3) -> Color {
        self.material().diffuse_color
    }
}
