pub mod email;
pub mod language;
pub mod subscription;
pub mod training;
pub mod whatsapp;
