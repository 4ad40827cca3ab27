mod quat;
pub mod result;
mod traits;
mod vec3;

pub use quat::{ANGLE_AXIS_MIN_SINE, Operand, Quaternion, SLERP_LINEAR_THRESHOLD};
pub use result::{Error, Result};
pub use traits::{Identity, Zero};
pub use vec3::Vec3;
