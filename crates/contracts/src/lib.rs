//! Shared contracts between the estimate session logic and its hosts.
//!
//! Everything here is a plain serde-serializable record: selection shapes are
//! total structs (every field always present, empty string rather than absent)
//! so downstream code never has to reason about missing keys.

pub mod domain;
