pub(crate) mod chat;
pub mod health_checks;
pub(crate) mod premium;

pub use health_checks::*;
