pub mod aggregate;

pub use aggregate::EstimateHeader;
