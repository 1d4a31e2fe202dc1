mod error;
mod parts;

pub use error::*;
pub use parts::*;

pub(crate) use parts::TEXT_FRAGMENT_PREFIX;
