mod base;
mod interface;
mod printer;

pub use base::*;
pub use interface::*;
pub use printer::ErrorContext;
pub(crate) use printer::Printer;
