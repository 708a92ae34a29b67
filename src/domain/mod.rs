pub mod models;
pub mod source;
pub mod splice;
pub mod text;
pub mod trigger;
