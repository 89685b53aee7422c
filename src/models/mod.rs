mod business;
mod conversation;

pub use business::*;
pub use conversation::*;
