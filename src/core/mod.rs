//! Core building blocks shared by the domain and systems layers.

pub mod console;
pub mod random;
pub mod transform;
pub mod vec3;

pub use transform::{GroupTransform, Pose};
pub use vec3::Vec3;
