//! Orchestration for a single `link-inspect` invocation.

use std::path::Path;

use tracing::{debug, instrument};

use crate::core::predicate::Predicate;
use crate::error::InspectError;
use crate::io::link_store::RecordSource;
use crate::report::Outcome;

/// Raw inputs for one inspection, as the caller supplied them.
#[derive(Debug, Clone, Copy)]
pub struct InspectRequest<'a> {
    pub link: &'a Path,
    pub field: &'a str,
    pub operator: &'a str,
    pub reference: &'a str,
}

/// Validate the request, load the link, and evaluate the predicate.
///
/// The predicate is validated before `source` is consulted, so malformed
/// input never touches the filesystem.
#[instrument(skip_all, fields(link = %request.link.display(), field = request.field, operator = request.operator))]
pub fn evaluate_request<S: RecordSource>(
    source: &S,
    request: &InspectRequest<'_>,
) -> Result<bool, InspectError> {
    let predicate = Predicate::parse(request.field, request.operator, request.reference)?;
    debug!(reference = %predicate.reference(), "predicate validated");

    let record = source.load(request.link)?;
    let satisfied = predicate.evaluate(&record)?;
    debug!(satisfied, "predicate evaluated");
    Ok(satisfied)
}

/// Run one inspection and classify the result.
pub fn inspect<S: RecordSource>(source: &S, request: &InspectRequest<'_>) -> Outcome {
    Outcome::from_result(evaluate_request(source, request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Family, FieldSelector};
    use crate::test_support::{StaticSource, build_ok_record, record};

    fn request<'a>(field: &'a str, operator: &'a str, reference: &'a str) -> InspectRequest<'a> {
        InspectRequest {
            link: Path::new("build.link"),
            field,
            operator,
            reference,
        }
    }

    #[test]
    fn satisfied_and_not_satisfied() {
        let source = StaticSource::ok(build_ok_record());
        assert_eq!(
            inspect(&source, &request("stdout", "contains", "OK")),
            Outcome::Satisfied
        );
        assert_eq!(
            inspect(&source, &request("stdout", "contains", "FAIL")),
            Outcome::NotSatisfied
        );
        assert_eq!(
            inspect(&source, &request("exit-code", "lt", "5")),
            Outcome::Satisfied
        );
    }

    #[test]
    fn invalid_operator_is_rejected_before_loading() {
        let source = StaticSource::ok(build_ok_record());
        let outcome = inspect(&source, &request("exit-code", "greater", "0"));
        assert_eq!(
            outcome,
            Outcome::EvaluationError(InspectError::InvalidOperator {
                token: "greater".to_string(),
                family: Family::Numeric,
            })
        );
        assert_eq!(source.loads(), 0);
    }

    #[test]
    fn family_mismatch_is_rejected_before_loading() {
        let source = StaticSource::ok(build_ok_record());
        let outcome = inspect(&source, &request("stdout", "eq", "0"));
        assert!(matches!(
            outcome,
            Outcome::EvaluationError(InspectError::OperatorFamilyMismatch { .. })
        ));
        assert_eq!(source.loads(), 0);
    }

    #[test]
    fn load_failure_is_error_not_failure() {
        let source = StaticSource::err(InspectError::RecordNotFound {
            path: "build.link".into(),
        });
        let outcome = inspect(&source, &request("stdout", "is", ""));
        assert!(matches!(
            outcome,
            Outcome::EvaluationError(InspectError::RecordNotFound { .. })
        ));
        assert_eq!(source.loads(), 1);
    }

    #[test]
    fn absent_stream_is_error_not_failure() {
        let source = StaticSource::ok(record(None, Some(""), 0));
        let outcome = inspect(&source, &request("stdout", "contains-not", "error"));
        assert_eq!(
            outcome,
            Outcome::EvaluationError(InspectError::FieldAbsent {
                field: FieldSelector::Stdout
            })
        );
    }

    #[test]
    fn repeated_inspections_agree() {
        let source = StaticSource::ok(build_ok_record());
        let req = request("stderr", "is", "");
        let first = inspect(&source, &req);
        assert_eq!(first, Outcome::Satisfied);
        assert_eq!(inspect(&source, &req), first);
        assert_eq!(source.loads(), 2);
    }
}
