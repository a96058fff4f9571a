mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::{ChessPlane, GeometryPlane};
pub use sphere::Sphere;

use crate::hittable::Hittable;
use crate::material::Material;
use crate::math::*;

/// Closed set of scene primitives.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Plane(GeometryPlane),
    ChessPlane(ChessPlane),
}

impl From<Sphere> for Shape {
    fn from(data: Sphere) -> Self {
        Shape::Sphere(data)
    }
}

impl From<Cylinder> for Shape {
    fn from(data: Cylinder) -> Self {
        Shape::Cylinder(data)
    }
}

impl From<GeometryPlane> for Shape {
    fn from(data: GeometryPlane) -> Self {
        Shape::Plane(data)
    }
}

impl From<ChessPlane> for Shape {
    fn from(data: ChessPlane) -> Self {
        Shape::ChessPlane(data)
    }
}

impl Hittable for Shape {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(origin, direction),
            Shape::Cylinder(cylinder) => cylinder.intersect(origin, direction),
            Shape::Plane(plane) => plane.intersect(origin, direction),
            Shape::ChessPlane(board) => board.intersect(origin, direction),
        }
    }
    fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal(point),
            Shape::Cylinder(cylinder) => cylinder.normal(point),
            Shape::Plane(plane) => plane.normal(point),
            Shape::ChessPlane(board) => board.normal(point),
        }
    }
    fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
            Shape::Cylinder(cylinder) => cylinder.material(),
            Shape::Plane(plane) => plane.material(),
            Shape::ChessPlane(board) => board.material(),
        }
    }
    fn color(&self, point: Vec3) -> Color {
        match self {
            Shape::Sphere(sphere) => sphere.color(point),
            Shape::Cylinder(cylinder) => cylinder.color(point),
            Shape::Plane(plane) => plane.color(point),
            Shape::ChessPlane(board) => board.color(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_color() {
        let sphere: Shape = Sphere::new(Vec3::ZERO, 1.0, Material::RED).into();
        assert_eq!(sphere.color(Vec3::Y), Material::RED.diffuse_color);

        let board: Shape = ChessPlane::new(
            GeometryPlane::new(Vec3::ZERO, Vec3::Y, 0.0, 0.5, Material::YELLOW),
            100,
            BLACK,
            WHITE,
        )
        .into();
        let c = board.color(Vec3::new(0.1, 0.0, 0.002));
        assert!(c == BLACK || c == WHITE);
        assert_eq!(board.material().diffuse_color, Material::YELLOW.diffuse_color);
    }
}
