//! Status and location inference over ship history text.

pub mod assembler;
pub mod command;
pub mod date;
pub mod etl;
pub mod location;
pub mod placement;
pub mod status;
pub mod temporal;

pub use assembler::RecordAssembler;
pub use etl::TrackerEngine;
pub use location::{LocationClassifier, LocationRuleset};
pub use placement::{place_offsets, OffsetProfile};
pub use status::StatusSelector;
pub use temporal::{TemporalAnnotator, YearWindow};
