mod core;
mod model;

pub(crate) use self::core::*;
pub use self::core::MatchError;
pub(crate) use self::model::*;
