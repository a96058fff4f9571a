use crate::hittable::Hittable;
use crate::material::Material;
use crate::math::*;

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let oc = origin - self.center;
        let b = oc * direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < EPSILON {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let mut time = -b - discriminant_sqrt;
        if time < EPSILON {
            // origin is inside the sphere or the sphere is behind it
            time = -b + discriminant_sqrt;
        }
        (time > EPSILON).then_some(time)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_test_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, 3.0), 0.5, Material::RED)
    }

    #[test]
    fn test_hit_along_axis() {
        let sphere = unit_test_sphere();
        let t = sphere.intersect(Vec3::ZERO, Vec3::Z).unwrap();
        assert!((t - 2.5).abs() < 1e-12);
        assert_eq!(sphere.normal(Vec3::Z * t), -Vec3::Z);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_test_sphere();
        assert!(sphere.intersect(Vec3::ZERO, Vec3::Y).is_none());
        assert!(sphere.intersect(Vec3::ZERO, -Vec3::Z).is_none());
    }

    #[test]
    fn test_from_inside_uses_far_root() {
        let sphere = unit_test_sphere();
        let t = sphere.intersect(Vec3::new(0.0, 0.0, 3.0), Vec3::Z).unwrap();
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hit_point_on_surface() {
        let sphere = unit_test_sphere();
        let origin = Vec3::new(0.3, -0.2, 0.0);
        for target in [
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.2, 0.3, 2.9),
            Vec3::new(-0.3, 0.1, 3.2),
        ] {
            let direction = (target - origin).normalized();
            let t = sphere.intersect(origin, direction).unwrap();
            assert!(t > EPSILON);
            let point = origin + direction * t;
            assert!(((point - sphere.center).norm() - sphere.radius).abs() < 1e-9);
        }
    }
}
