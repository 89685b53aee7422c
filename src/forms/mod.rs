pub mod chat;
pub mod premium;

pub use chat::*;
pub use premium::*;
