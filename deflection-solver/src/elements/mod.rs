//! Beam definition and its material and section

mod beam;
mod material;
mod section;

pub use beam::BeamSpec;
pub use material::Material;
pub use section::Section;
