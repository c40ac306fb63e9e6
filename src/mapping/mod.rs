pub mod generator;
pub mod loader;
