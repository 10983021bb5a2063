pub mod change_range;
pub mod merge_result;
pub mod provenance;
pub mod range_kind;
pub mod revision;
pub mod revision_field;
pub mod span;
