//! Selection-session state machine for valve purchase-estimate requests.
//!
//! One `SelectionSession` serves both the request page and the review page:
//! it keeps an independently edited specification per TagNo sheet, preserves
//! in-progress edits across sheet switches, resolves cascading unit/value
//! dropdowns and derives the fixed-width part number from the working copy.
//! Everything external (catalog fetch, specification fetch/save) goes through
//! the [`api::EstimateApi`] trait.

pub mod api;
pub mod cascade;
pub mod encoder;
pub mod error;
pub mod master_data;
pub mod payload;
pub mod search;
pub mod session;
pub mod store;

pub use api::{ApiError, EstimateApi};
pub use cascade::SpecField;
pub use encoder::{part_number, PART_NUMBER_LEN};
pub use error::{CascadeError, EstimateError};
pub use master_data::CatalogSet;
pub use search::{AccessoryFilter, SearchDebounce};
pub use session::{SelectionSession, SwitchOutcome, SwitchTicket};
pub use store::SelectionStore;
