pub mod sdf_instance;

pub use sdf_instance::{SDFBuffer, SDFInstance};
