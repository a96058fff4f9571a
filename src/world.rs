use crate::camera::Camera;
use crate::geometry::*;
use crate::hittable::{HitRecord, Hittable};
use crate::light::Light;
use crate::material::Material;
use crate::math::*;

/// Shapes and lights of a scene. Built once, read-only while rendering.
#[derive(Clone, Debug)]
pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<Light>,
    pub background: Color,
}

impl World {
    pub fn new(shapes: Vec<Shape>, lights: Vec<Light>) -> World {
        info!(
            "constructed world with {} shapes and {} lights",
            shapes.len(),
            lights.len()
        );
        World {
            shapes,
            lights,
            background: WHITE,
        }
    }

    pub fn empty() -> World {
        World::new(Vec::new(), Vec::new())
    }

    /// The built-in showcase scene: three spheres, a glass and a mirror
    /// cylinder over a checkerboard floor, lit by three point lights and one
    /// directional light.
    pub fn default_scene() -> World {
        let shapes: Vec<Shape> = vec![
            Sphere::new(Vec3::new(-1.0, 0.0, 3.0), 0.5, Material::RED).into(),
            Sphere::new(Vec3::new(0.0, 0.5, 3.0), 0.3, Material::GREEN).into(),
            Sphere::new(Vec3::new(1.0, 0.0, 3.0), 0.6, Material::BLUE).into(),
            Cylinder::new(Vec3::new(0.0, -0.3, 0.5), 0.25, 0.5, Material::GLASS).into(),
            Cylinder::new(Vec3::new(0.0, 0.0, 3.5), 0.5, 0.75, Material::MIRROR).into(),
            ChessPlane::new(
                GeometryPlane::new(
                    Vec3::new(0.0, 0.0, 12.0),
                    Vec3::Y,
                    0.5,
                    16.0,
                    Material::YELLOW,
                ),
                100,
                BLACK,
                WHITE,
            )
            .into(),
        ];
        let lights = vec![
            Light::point(0.3, Vec3::new(2.0, 1.0, 0.0)),
            Light::point(0.3, Vec3::new(0.0, 1.0, 0.0)),
            Light::point(0.3, Vec3::new(-2.0, 1.0, 0.0)),
            Light::directional(0.5, Vec3::new(0.0, 1.0, 1.0)),
        ];
        World::new(shapes, lights)
    }

    /// Camera placement matching `default_scene`.
    pub fn default_camera() -> Camera {
        Camera::new(Vec3::new(-0.25, 0.0, -1.5), Vec3::new(6.1, 0.0, 0.0))
    }

    /// Nearest hit with `t_min < t < t_max`. Shapes earlier in the list win
    /// ties.
    pub fn closest_hit(
        &self,
        origin: Vec3,
        direction: Vec3,
        t_min: f64,
        t_max: f64,
    ) -> Option<HitRecord<'_>> {
        let mut closest: Option<(f64, &Shape)> = None;
        for shape in self.shapes.iter() {
            if let Some(time) = shape.intersect(origin, direction) {
                let nearest = closest.map_or(t_max, |(t, _)| t);
                if time > t_min && time < nearest {
                    closest = Some((time, shape));
                }
            }
        }
        closest.map(|(time, shape)| {
            let point = origin + direction * time;
            HitRecord::new(time, point, shape.normal(point), shape)
        })
    }

    /// Whether anything lies between `t_min` and `t_max` along the ray.
    pub fn is_occluded(&self, origin: Vec3, direction: Vec3, t_min: f64, t_max: f64) -> bool {
        self.shapes.iter().any(|shape| {
            shape
                .intersect(origin, direction)
                .is_some_and(|time| time > t_min && time < t_max)
        })
    }
}
