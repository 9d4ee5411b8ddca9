//! Validated predicate: field selector, operator, and reference value.
//!
//! A [`Predicate`] can only be built from a consistent combination, so
//! evaluation never has to reject input that should have been caught earlier.

use crate::core::accessor::get_field;
use crate::core::numeric::evaluate_numeric;
use crate::core::text::evaluate_text;
use crate::core::types::{FieldSelector, FieldValue, Operator, Reference};
use crate::error::InspectError;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    field: FieldSelector,
    operator: Operator,
    reference: Reference,
}

impl Predicate {
    /// Build a predicate from raw tokens.
    ///
    /// Checks run in order: field selector, operator (within the field's
    /// family), then the reference value.
    pub fn parse(field: &str, operator: &str, reference: &str) -> Result<Self, InspectError> {
        let field: FieldSelector = field.parse()?;
        let operator = Operator::parse_for(operator, field)?;
        let reference = Reference::parse_for(reference, field.family())?;
        Ok(Self {
            field,
            operator,
            reference,
        })
    }

    /// Build a predicate from typed parts, rejecting mixed families.
    pub fn new(
        field: FieldSelector,
        operator: Operator,
        reference: Reference,
    ) -> Result<Self, InspectError> {
        let reference_matches = matches!(
            (&operator, &reference),
            (Operator::Text(_), Reference::Text(_)) | (Operator::Numeric(_), Reference::Integer(_))
        );
        if operator.family() != field.family() {
            return Err(InspectError::OperatorFamilyMismatch {
                token: operator.as_str().to_string(),
                field,
            });
        }
        if !reference_matches {
            return Err(InspectError::InvalidReference {
                token: reference.to_string(),
            });
        }
        Ok(Self {
            field,
            operator,
            reference,
        })
    }

    pub fn field(&self) -> FieldSelector {
        self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Evaluate against `record`. Fails only if the field is absent.
    pub fn evaluate(&self, record: &Record) -> Result<bool, InspectError> {
        let value = get_field(record, self.field)?;
        match (value, self.operator, &self.reference) {
            (FieldValue::Text(actual), Operator::Text(op), Reference::Text(reference)) => {
                Ok(evaluate_text(actual, op, reference))
            }
            (FieldValue::Integer(actual), Operator::Numeric(op), Reference::Integer(reference)) => {
                Ok(evaluate_numeric(actual, op, *reference))
            }
            _ => Err(InspectError::OperatorFamilyMismatch {
                token: self.operator.as_str().to_string(),
                field: self.field,
            }),
        }
    }
}
