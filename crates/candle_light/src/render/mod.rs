//! Render-side data: meshes, materials and lights
//!
//! These are plain data types stored in scene nodes. Drawing them is the job
//! of whatever renderer walks the scene graph.

pub mod lighting;
pub mod material;
pub mod mesh;

pub use lighting::{PointLight, ShadowCamera};
pub use material::{Material, Shading};
pub use mesh::{Bounds, Mesh, Primitive, Vertex};
