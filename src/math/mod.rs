pub mod angle;
pub mod bbox;
pub mod complex;
pub mod coordinates;
pub mod float;
pub mod maths;
pub mod matrix;
pub mod transform;
pub mod vector2;

pub use bbox::{BBox, Size};
pub use complex::Complex;
pub use transform::TransformationMatrix;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;
