pub mod aggregate;

pub use aggregate::{TagSheet, TagSheetDto};
