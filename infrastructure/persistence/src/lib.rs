pub mod db;
mod error;
pub mod memory;
pub mod cart {
    pub mod entity;
    pub mod repository;
    pub mod unit_of_work;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
