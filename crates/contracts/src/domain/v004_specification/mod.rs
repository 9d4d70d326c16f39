pub mod dto;
pub mod record;
pub mod save;

pub use dto::{ActuatorSectionDto, BodySectionDto, SpecificationDto, TrimSectionDto};
pub use record::{
    AccessoryKind, AccessorySet, AccessorySlot, ActuatorSelection, BodySelection,
    SpecificationRecord, TrimSelection,
};
pub use save::{BulkSaveItem, BulkSaveRequest, SpecificationSaveDto};
