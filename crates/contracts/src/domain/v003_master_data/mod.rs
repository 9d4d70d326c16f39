pub mod catalog;

pub use catalog::{AccessoryModelRow, CatalogFamily, CatalogRow};
