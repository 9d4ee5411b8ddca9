//! Field extraction from a loaded record.

use crate::core::types::{FieldSelector, FieldValue};
use crate::error::InspectError;
use crate::record::Record;

/// Return the value `selector` names in `record`.
///
/// A missing stream is [`InspectError::FieldAbsent`]; an empty stream is a
/// present value.
pub fn get_field(record: &Record, selector: FieldSelector) -> Result<FieldValue<'_>, InspectError> {
    match selector {
        FieldSelector::Stdout | FieldSelector::Stderr => record
            .byproduct(selector.as_str())
            .map(FieldValue::Text)
            .ok_or(InspectError::FieldAbsent { field: selector }),
        FieldSelector::ExitCode => Ok(FieldValue::Integer(record.exit_code)),
    }
}
