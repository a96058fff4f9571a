use crate::math::{Color, Vec3};

/// Optical properties shared by every shape that uses them.
///
/// `albedo` holds independent weights for the diffuse, specular, reflected
/// and refracted contributions, in that order. They are not required to sum
/// to one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub refractive_index: f64,
    pub diffuse_color: Color,
    pub specular_exponent: f64,
    pub albedo: [f64; 4],
}

impl Material {
    pub const fn new(
        refractive_index: f64,
        diffuse_color: Color,
        specular_exponent: f64,
        albedo: [f64; 4],
    ) -> Self {
        Material {
            refractive_index,
            diffuse_color,
            specular_exponent,
            albedo,
        }
    }

    pub fn diffuse_weight(&self) -> f64 {
        self.albedo[0]
    }

    pub fn specular_weight(&self) -> f64 {
        self.albedo[1]
    }

    pub fn reflect_weight(&self) -> f64 {
        self.albedo[2]
    }

    pub fn refract_weight(&self) -> f64 {
        self.albedo[3]
    }

    pub const GLASS: Material = Material::new(
        1.4,
        Vec3::new(0.6, 0.7, 0.8),
        125.0,
        [0.0, 0.5, 0.1, 0.8],
    );
    pub const MIRROR: Material = Material::new(1.0, Vec3::ONE, 1425.0, [0.0, 10.0, 0.8, 0.0]);
    pub const RED: Material = Material::new(1.0, Vec3::X, 500.0, [1.0, 0.5, 0.2, 0.0]);
    pub const BLUE: Material = Material::new(1.0, Vec3::Z, 500.0, [1.0, 0.5, 0.3, 0.0]);
    pub const GREEN: Material = Material::new(1.0, Vec3::Y, 10.0, [1.0, 0.5, 0.5, 0.0]);
    pub const YELLOW: Material = Material::new(
        1.0,
        Vec3::new(1.0, 1.0, 0.0),
        1000.0,
        [0.8, 10.0, 0.5, 0.0],
    );
}
