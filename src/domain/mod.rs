//! Catalog domain model
pub mod aggregates;
pub mod value_objects;

pub use aggregates::{Category, Product, Variant};
pub use value_objects::{Pagination, Price};
