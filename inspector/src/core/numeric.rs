//! Relational predicates over the recorded exit code.

use crate::core::types::NumericOperator;

/// Apply `op` to the recorded `actual` exit code against `reference`.
///
/// The reference is the left operand: `lt` holds when `reference > actual`,
/// i.e. when the exit code is less than the reference.
pub fn evaluate_numeric(actual: i64, op: NumericOperator, reference: i64) -> bool {
    match op {
        NumericOperator::Eq => reference == actual,
        NumericOperator::Ne => reference != actual,
        NumericOperator::Lt => reference > actual,
        NumericOperator::Le => reference >= actual,
        NumericOperator::Gt => reference < actual,
        NumericOperator::Ge => reference <= actual,
    }
}
