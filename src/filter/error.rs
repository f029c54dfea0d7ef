use thiserror::Error;

use crate::filter::RequiredField;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A selection widget emitted a label outside the fixed label set
    #[error("unknown {field} label: {label:?}")]
    UnknownLabel { field: &'static str, label: String },

    /// Submit attempted while required fields are still empty
    #[error("filter is incomplete, missing: {}", join_fields(.missing))]
    Incomplete { missing: Vec<RequiredField> },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}
