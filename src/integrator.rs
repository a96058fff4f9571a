use crate::hittable::Hittable;
use crate::light::Light;
use crate::material::Material;
use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;

/// Direction of a ray refracted through a surface, by Snell's law.
///
/// `cos` is the cosine between the reversed incident direction and `normal`.
/// A negative `cos` means the ray is leaving the medium, in which case the
/// normal and the two indices are swapped. Total internal reflection yields
/// the fixed direction `(1, 0, 0)`.
pub fn refract(incident: Vec3, normal: Vec3, cos: f64, eta_t: f64, eta_i: f64) -> Vec3 {
    if cos < 0.0 {
        return refract(incident, -normal, -cos, eta_i, eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos * cos);
    if k < 0.0 {
        return Vec3::X;
    }
    incident * eta + normal * (eta * cos - k.sqrt())
}

/// Recursive Whitted tracer: Phong direct lighting with hard shadows, plus
/// mirror reflection and refraction up to a fixed depth.
pub struct WhittedIntegrator {
    pub world: Arc<World>,
    pub max_depth: i32,
}

impl WhittedIntegrator {
    pub fn new(world: Arc<World>, max_depth: u8) -> Self {
        WhittedIntegrator {
            world,
            max_depth: i32::from(max_depth),
        }
    }

    /// Color seen along a primary ray.
    pub fn color(&self, origin: Vec3, direction: Vec3, profile: &mut Profile) -> Color {
        profile.camera_rays += 1;
        self.trace(origin, direction, 0.0, INFINITY, self.max_depth, profile)
    }

    /// Diffuse and specular light intensity at `point`, already weighted by
    /// the material albedo.
    pub fn compute_lighting(
        &self,
        point: Vec3,
        normal: Vec3,
        direction: Vec3,
        material: &Material,
        profile: &mut Profile,
    ) -> (f64, f64) {
        let mut diffuse = 0.0;
        let mut specular = 0.0;
        for light in self.world.lights.iter() {
            let (to_light, max_distance) = light.direction_from(point);
            profile.shadow_rays += 1;
            if self
                .world
                .is_occluded(point, to_light, EPSILON, max_distance)
            {
                continue;
            }
            let (d, s) = shade(light, to_light, normal, direction, material);
            diffuse += d;
            specular += s;
        }
        (
            diffuse * material.diffuse_weight(),
            specular * material.specular_weight(),
        )
    }

    pub fn trace(
        &self,
        origin: Vec3,
        direction: Vec3,
        t_min: f64,
        t_max: f64,
        depth: i32,
        profile: &mut Profile,
    ) -> Color {
        let level = (self.max_depth - depth).max(0) as usize;
        profile.deepest_bounce = profile.deepest_bounce.max(level);

        let hit = match self.world.closest_hit(origin, direction, t_min, t_max) {
            Some(hit) => hit,
            None => return self.world.background,
        };
        let (point, normal) = (hit.point, hit.normal);
        let material = hit.shape.material();

        let (diffuse, specular) =
            self.compute_lighting(point, normal, direction, material, profile);
        let mut color = hit.shape.color(point) * diffuse + Vec3::from(specular);

        if depth < 0 {
            return color;
        }

        let cos = direction * normal;
        if material.reflect_weight().abs() > EPSILON {
            profile.bounce_rays += 1;
            let reflected = direction.reflect(normal);
            color += self.trace(point, reflected, EPSILON, INFINITY, depth - 1, profile)
                * material.reflect_weight();
        }
        if material.refract_weight().abs() > EPSILON {
            profile.bounce_rays += 1;
            let refracted = refract(direction, normal, -cos, material.refractive_index, 1.0);
            color += self.trace(point, refracted, EPSILON, INFINITY, depth - 1, profile)
                * material.refract_weight();
        }
        color
    }
}

/// Unshadowed Phong terms from one light, before albedo weighting.
fn shade(
    light: &Light,
    to_light: Vec3,
    normal: Vec3,
    direction: Vec3,
    material: &Material,
) -> (f64, f64) {
    let light_cos = to_light * normal;
    let specular_cos = to_light.reflect(normal) * direction;
    let diffuse = if light_cos > 0.0 {
        light_cos * light.intensity
    } else {
        0.0
    };
    let specular = if specular_cos > 0.0 {
        specular_cos.powf(material.specular_exponent) * light.intensity
    } else {
        0.0
    };
    (diffuse, specular)
}
