pub mod aggregate;

pub use aggregate::{ValveType, ValveTypeDto};
