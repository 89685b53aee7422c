pub mod business;
pub mod conversation;
