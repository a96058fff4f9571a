use crate::hittable::Hittable;
use crate::material::Material;
use crate::math::*;

/// Closed cylinder with its axis along Y.
#[derive(Clone, Debug)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: f64,
    pub half_height: f64,
    pub material: Material,
}

impl Cylinder {
    /// `height` is the full height; the cylinder spans `center.y ± height / 2`.
    pub fn new(center: Vec3, radius: f64, height: f64, material: Material) -> Cylinder {
        Cylinder {
            center,
            radius,
            half_height: height / 2.0,
            material,
        }
    }

    /// Closest valid intersection with either end cap.
    fn cap_intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        if direction.y.abs() < EPSILON {
            return None;
        }
        let r2 = self.radius * self.radius;
        [self.half_height, -self.half_height]
            .into_iter()
            .filter_map(|cap_y| {
                let time = (self.center.y + cap_y - origin.y) / direction.y;
                if time <= EPSILON {
                    return None;
                }
                let p = origin + direction * time - self.center;
                (p.x * p.x + p.z * p.z - r2 < EPSILON).then_some(time)
            })
            .reduce(f64::min)
    }
}

impl Hittable for Cylinder {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let oc = origin - self.center;
        let a = direction.x * direction.x + direction.z * direction.z;
        let b = oc.x * direction.x + oc.z * direction.z;
        let c = oc.x * oc.x + oc.z * oc.z - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant < EPSILON {
            // parallel to the axis or missing the infinite tube
            return self.cap_intersect(origin, direction);
        }
        let discriminant_sqrt = discriminant.sqrt();
        let mut time = (-b - discriminant_sqrt) / a;
        if time < EPSILON {
            time = (-b + discriminant_sqrt) / a;
        }
        if (oc.y + time * direction.y).abs() > self.half_height {
            // side hit lies beyond the ends of the cylinder
            return self.cap_intersect(origin, direction);
        }
        let side = (time > EPSILON).then_some(time);
        // from inside the tube a cap can come before the far side
        match (side, self.cap_intersect(origin, direction)) {
            (Some(side), Some(cap)) => Some(side.min(cap)),
            (side, cap) => side.or(cap),
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        let p = point - self.center;
        if self.half_height - p.y.abs() < EPSILON {
            Vec3::new(0.0, p.y.signum(), 0.0)
        } else {
            Vec3::new(p.x, 0.0, p.z).normalized()
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cylinder() -> Cylinder {
        // spans y in [-1, 1]
        Cylinder::new(Vec3::new(0.0, 0.0, 5.0), 0.5, 2.0, Material::GLASS)
    }

    fn on_surface(cylinder: &Cylinder, point: Vec3) -> bool {
        let p = point - cylinder.center;
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        let on_side = (radial - cylinder.radius).abs() < 1e-6
            && p.y.abs() <= cylinder.half_height + 1e-6;
        let on_cap = (p.y.abs() - cylinder.half_height).abs() < 1e-6
            && radial <= cylinder.radius + 1e-6;
        on_side || on_cap
    }

    #[test]
    fn test_side_hit() {
        let cylinder = test_cylinder();
        let t = cylinder.intersect(Vec3::ZERO, Vec3::Z).unwrap();
        assert!((t - 4.5).abs() < 1e-9);
        let n = cylinder.normal(Vec3::Z * t);
        assert!((n - (-Vec3::Z)).norm() < 1e-9);
    }

    #[test]
    fn test_cap_hit_from_above() {
        let cylinder = test_cylinder();
        let origin = Vec3::new(0.1, 3.0, 5.0);
        let t = cylinder.intersect(origin, -Vec3::Y).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
        assert_eq!(cylinder.normal(origin - Vec3::Y * t), Vec3::Y);
    }

    #[test]
    fn test_side_miss_above_falls_back_to_cap() {
        let cylinder = test_cylinder();
        // enters through the top cap, the infinite tube is hit above the cylinder
        let origin = Vec3::new(0.0, 2.0, 4.0);
        let direction = Vec3::new(0.0, -1.0, 1.0).normalized();
        let t = cylinder.intersect(origin, direction).unwrap();
        let point = origin + direction * t;
        assert!((point.y - 1.0).abs() < 1e-9, "{:?}", point);
        assert!(on_surface(&cylinder, point));
    }

    #[test]
    fn test_cap_before_far_side_from_inside_tube() {
        // starts above the cylinder but inside its infinite tube
        let cylinder = Cylinder::new(Vec3::new(0.0, 0.0, 3.0), 0.5, 1.0, Material::MIRROR);
        let origin = Vec3::new(0.0, 2.0, 3.0);
        let direction = (Vec3::new(0.45, 0.3, 3.0) - origin).normalized();
        let t = cylinder.intersect(origin, direction).unwrap();
        let point = origin + direction * t;
        assert!((point.y - 0.5).abs() < 1e-9, "{:?}", point);
        assert!(on_surface(&cylinder, point));
        assert_eq!(cylinder.normal(point), Vec3::Y);
    }

    #[test]
    fn test_misses() {
        let cylinder = test_cylinder();
        assert!(cylinder.intersect(Vec3::ZERO, Vec3::X).is_none());
        // passes over the top
        assert!(cylinder
            .intersect(Vec3::new(0.0, 1.5, 0.0), Vec3::Z)
            .is_none());
        // straight down outside the radius
        assert!(cylinder
            .intersect(Vec3::new(2.0, 3.0, 5.0), -Vec3::Y)
            .is_none());
    }

    #[test]
    fn test_hit_points_on_surface() {
        let cylinder = test_cylinder();
        let origin = Vec3::new(-0.4, 2.5, 1.0);
        for target in [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.2, 0.9, 5.1),
            Vec3::new(-0.1, -0.7, 4.8),
            Vec3::new(0.0, 1.0, 5.0),
        ] {
            let direction = (target - origin).normalized();
            let t = cylinder.intersect(origin, direction).unwrap();
            assert!(t > EPSILON);
            assert!(on_surface(&cylinder, origin + direction * t));
        }
    }
}
