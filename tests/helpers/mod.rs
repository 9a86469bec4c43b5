pub mod factories;
pub mod factory;
