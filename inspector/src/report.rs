//! Outcome classification and rendering.
//!
//! The exit status is the contract; rendering is informational and can be
//! suppressed without changing it.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, InspectError};
use crate::exit_codes;
use crate::inspect::InspectRequest;

/// Tri-state result of one inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Satisfied,
    NotSatisfied,
    /// The check could not run. Never folded into `NotSatisfied`.
    EvaluationError(InspectError),
}

impl Outcome {
    pub fn from_result(result: Result<bool, InspectError>) -> Self {
        match result {
            Ok(true) => Outcome::Satisfied,
            Ok(false) => Outcome::NotSatisfied,
            Err(err) => Outcome::EvaluationError(err),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Satisfied => exit_codes::SATISFIED,
            Outcome::NotSatisfied => exit_codes::NOT_SATISFIED,
            Outcome::EvaluationError(err) => err.exit_code(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Outcome::Satisfied => "satisfied",
            Outcome::NotSatisfied => "not_satisfied",
            Outcome::EvaluationError(_) => "error",
        }
    }
}

/// How an outcome is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `satisfied` / `not satisfied` on stdout, errors on stderr.
    #[default]
    Text,
    /// One JSON object on stdout for every outcome.
    Json,
}

/// Lines to print, already formatted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: &'static str,
    link: String,
    field: &'a str,
    operator: &'a str,
    reference: &'a str,
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    kind: ErrorKind,
    message: String,
}

pub fn render(
    outcome: &Outcome,
    request: &InspectRequest<'_>,
    format: OutputFormat,
) -> serde_json::Result<Rendered> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            Outcome::Satisfied => Rendered {
                stdout: Some("satisfied".to_string()),
                stderr: None,
            },
            Outcome::NotSatisfied => Rendered {
                stdout: Some("not satisfied".to_string()),
                stderr: None,
            },
            Outcome::EvaluationError(err) => Rendered {
                stdout: None,
                stderr: Some(format!("error: {err}")),
            },
        }),
        OutputFormat::Json => {
            let report = JsonReport {
                outcome: outcome.label(),
                link: request.link.display().to_string(),
                field: request.field,
                operator: request.operator,
                reference: request.reference,
                error: match outcome {
                    Outcome::EvaluationError(err) => Some(JsonError {
                        kind: err.kind(),
                        message: err.to_string(),
                    }),
                    _ => None,
                },
            };
            Ok(Rendered {
                stdout: Some(serde_json::to_string(&report)?),
                stderr: None,
            })
        }
    }
}

/// Write each present line followed by a newline.
pub fn write_rendered(
    rendered: &Rendered,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> std::io::Result<()> {
    if let Some(line) = &rendered.stdout {
        writeln!(stdout, "{line}")?;
    }
    if let Some(line) = &rendered.stderr {
        writeln!(stderr, "{line}")?;
    }
    Ok(())
}
