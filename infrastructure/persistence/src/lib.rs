pub mod db;
pub mod key_value {
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
