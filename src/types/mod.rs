//! Primitive value types shared across entities, tables and objects.

pub mod bounds;
pub mod color;
pub mod handle;
pub mod line_weight;
pub mod transform;
pub mod transparency;
pub mod vector;
pub mod version;

pub use bounds::{BoundingBox2D, BoundingBox3D};
pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transform::{is_zero_angle, rotate_point_2d, Matrix3, Matrix4, Transform};
pub use transparency::Transparency;
pub use vector::{Vector2, Vector3};
pub use version::DxfVersion;
