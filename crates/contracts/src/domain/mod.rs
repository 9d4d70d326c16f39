pub mod common;
pub mod v001_valve_type;
pub mod v002_tag_sheet;
pub mod v003_master_data;
pub mod v004_specification;
pub mod v005_estimate;
