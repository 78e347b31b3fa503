pub mod client;
pub mod product_repository;
pub mod settings_repository;
