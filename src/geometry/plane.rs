use crate::hittable::Hittable;
use crate::material::Material;
use crate::math::*;

/// Finite square patch of the plane `normal · p + offset = 0`.
///
/// A hit is kept only when the hit point is within `size` of `center` along
/// every world axis, so `size` is the half-width of the patch.
#[derive(Clone, Debug)]
pub struct GeometryPlane {
    pub center: Vec3,
    pub normal: Vec3,
    pub offset: f64,
    pub size: f64,
    pub material: Material,
}

impl GeometryPlane {
    pub fn new(
        center: Vec3,
        normal: Vec3,
        offset: f64,
        size: f64,
        material: Material,
    ) -> GeometryPlane {
        GeometryPlane {
            center,
            normal: normal.normalized(),
            offset,
            size,
            material,
        }
    }

    fn contains(&self, point: Vec3) -> bool {
        let local = point - self.center;
        local.x.abs() <= self.size && local.y.abs() <= self.size && local.z.abs() <= self.size
    }
}

impl Hittable for GeometryPlane {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let cos = self.normal * direction;
        if cos.abs() < EPSILON {
            // ray runs parallel to the plane
            return None;
        }
        let time = -(self.offset + origin * self.normal) / cos;
        if time <= EPSILON {
            return None;
        }
        self.contains(origin + direction * time).then_some(time)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// A `GeometryPlane` colored as a 3D checkerboard.
#[derive(Clone, Debug)]
pub struct ChessPlane {
    pub plane: GeometryPlane,
    // cells per patch width, as used by the parity computation
    cells: f64,
    pub color1: Color,
    pub color2: Color,
}

impl ChessPlane {
    pub fn new(plane: GeometryPlane, cell_count: u32, color1: Color, color2: Color) -> ChessPlane {
        ChessPlane {
            plane,
            cells: cell_count.saturating_sub(1) as f64,
            color1,
            color2,
        }
    }

    /// Parity of the cell index along one axis, for an offset from the center.
    fn parity(&self, offset: f64) -> i64 {
        let size = self.plane.size;
        let cell = ((offset + size) / (2.0 * size) * self.cells).round_ties_even();
        (cell as i64).rem_euclid(2)
    }
}

impl Hittable for ChessPlane {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        self.plane.intersect(origin, direction)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        self.plane.normal(point)
    }

    fn material(&self) -> &Material {
        &self.plane.material
    }

    fn color(&self, point: Vec3) -> Color {
        let d = point - self.plane.center;
        if self.parity(d.x) ^ self.parity(d.y) ^ self.parity(d.z) == 1 {
            self.color1
        } else {
            self.color2
        }
    }
}
