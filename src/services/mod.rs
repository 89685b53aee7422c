pub mod responder;
pub mod translator;

pub use translator::Translator;
