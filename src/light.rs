use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
}

/// A light source. For directional lights `position` holds the normalized
/// direction toward the light instead of a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub intensity: f64,
    pub position: Vec3,
}

impl Light {
    pub fn new(kind: LightKind, intensity: f64, position: Vec3) -> Self {
        let position = match kind {
            LightKind::Directional => position.normalized(),
            LightKind::Point => position,
        };
        Light {
            kind,
            intensity,
            position,
        }
    }

    pub fn point(intensity: f64, position: Vec3) -> Self {
        Light::new(LightKind::Point, intensity, position)
    }

    pub fn directional(intensity: f64, direction: Vec3) -> Self {
        Light::new(LightKind::Directional, intensity, direction)
    }

    /// Unit direction from `point` toward the light, and how far a shadow ray
    /// may travel before it would pass the light itself.
    pub fn direction_from(&self, point: Vec3) -> (Vec3, f64) {
        match self.kind {
            LightKind::Point => {
                let to_light = self.position - point;
                (to_light.normalized(), to_light.norm() - EPSILON)
            }
            LightKind::Directional => (self.position, INFINITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_is_normalized() {
        let light = Light::directional(0.5, Vec3::new(0.0, 1.0, 1.0));
        assert!((light.position.norm() - 1.0).abs() < 1e-12);
        let (dir, max_distance) = light.direction_from(Vec3::new(5.0, -3.0, 2.0));
        assert_eq!(dir, light.position);
        assert_eq!(max_distance, INFINITY);
    }

    #[test]
    fn test_point_light_stops_short() {
        let light = Light::point(0.3, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(light.position, Vec3::new(0.0, 4.0, 0.0));
        let (dir, max_distance) = light.direction_from(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(dir, Vec3::Y);
        assert!((max_distance - (3.0 - EPSILON)).abs() < 1e-12);
    }
}
