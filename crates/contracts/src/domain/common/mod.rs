//! Common types shared by all valve-domain records

pub mod code_label;

pub use code_label::CodeLabel;
