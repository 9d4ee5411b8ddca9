//! Closed vocabularies for field selection and predicate operators.
//!
//! Tokens are parsed with [`FromStr`] so unknown input is rejected with a
//! typed error before any record is touched.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InspectError;

/// Operator family a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Text,
    Numeric,
}

impl Family {
    /// Canonical operator tokens accepted for this family.
    pub fn operator_tokens(self) -> &'static [&'static str] {
        match self {
            Family::Text => &["is", "is-not", "contains", "contains-not"],
            Family::Numeric => &["eq", "ne", "lt", "le", "gt", "ge"],
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Text => f.write_str("text"),
            Family::Numeric => f.write_str("numeric"),
        }
    }
}

/// Which link attribute to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSelector {
    Stdout,
    Stderr,
    ExitCode,
}

impl FieldSelector {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldSelector::Stdout => "stdout",
            FieldSelector::Stderr => "stderr",
            FieldSelector::ExitCode => "exit-code",
        }
    }

    pub fn family(self) -> Family {
        match self {
            FieldSelector::Stdout | FieldSelector::Stderr => Family::Text,
            FieldSelector::ExitCode => Family::Numeric,
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldSelector {
    type Err = InspectError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "stdout" => Ok(FieldSelector::Stdout),
            "stderr" => Ok(FieldSelector::Stderr),
            // `return-value` is the byproduct key in-toto itself uses.
            "exit-code" | "return-value" => Ok(FieldSelector::ExitCode),
            _ => Err(InspectError::InvalidFieldSelector {
                token: token.to_string(),
            }),
        }
    }
}

/// Predicates over a captured text stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextOperator {
    Is,
    IsNot,
    Contains,
    ContainsNot,
}

impl TextOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            TextOperator::Is => "is",
            TextOperator::IsNot => "is-not",
            TextOperator::Contains => "contains",
            TextOperator::ContainsNot => "contains-not",
        }
    }
}

impl FromStr for TextOperator {
    type Err = InspectError;

    /// Accepts the canonical kebab-case tokens and the older spaced
    /// spellings (`is not`, `contains not`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "is" => Ok(TextOperator::Is),
            "is-not" | "is not" => Ok(TextOperator::IsNot),
            "contains" => Ok(TextOperator::Contains),
            "contains-not" | "contains not" => Ok(TextOperator::ContainsNot),
            _ => Err(InspectError::InvalidOperator {
                token: token.to_string(),
                family: Family::Text,
            }),
        }
    }
}

/// Relational predicates over the recorded exit code.
///
/// Each operator reads as "the exit code is `<op>` the reference", so `lt 5`
/// holds for an exit code of `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl NumericOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            NumericOperator::Eq => "eq",
            NumericOperator::Ne => "ne",
            NumericOperator::Lt => "lt",
            NumericOperator::Le => "le",
            NumericOperator::Gt => "gt",
            NumericOperator::Ge => "ge",
        }
    }
}

impl FromStr for NumericOperator {
    type Err = InspectError;

    /// Accepts `lt` as well as the `test(1)` spellings `-lt` and `--lt`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bare = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .unwrap_or(token);
        match bare {
            "eq" => Ok(NumericOperator::Eq),
            "ne" => Ok(NumericOperator::Ne),
            "lt" => Ok(NumericOperator::Lt),
            "le" => Ok(NumericOperator::Le),
            "gt" => Ok(NumericOperator::Gt),
            "ge" => Ok(NumericOperator::Ge),
            _ => Err(InspectError::InvalidOperator {
                token: token.to_string(),
                family: Family::Numeric,
            }),
        }
    }
}

/// An operator of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Operator {
    Text(TextOperator),
    Numeric(NumericOperator),
}

impl Operator {
    /// Parse `token` as an operator applicable to `field`.
    ///
    /// A token that only names an operator of the other family is reported as
    /// [`InspectError::OperatorFamilyMismatch`] against `field`.
    pub fn parse_for(token: &str, field: FieldSelector) -> Result<Self, InspectError> {
        let parsed = match field.family() {
            Family::Text => token.parse().map(Operator::Text),
            Family::Numeric => token.parse().map(Operator::Numeric),
        };
        parsed.map_err(|err| {
            let other_family = match field.family() {
                Family::Text => token.parse::<NumericOperator>().is_ok(),
                Family::Numeric => token.parse::<TextOperator>().is_ok(),
            };
            if other_family {
                InspectError::OperatorFamilyMismatch {
                    token: token.to_string(),
                    field,
                }
            } else {
                err
            }
        })
    }

    pub fn family(self) -> Family {
        match self {
            Operator::Text(_) => Family::Text,
            Operator::Numeric(_) => Family::Numeric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Text(op) => op.as_str(),
            Operator::Numeric(op) => op.as_str(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied value the field is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    Text(String),
    Integer(i64),
}

impl Reference {
    /// Interpret a raw reference token for `family`.
    pub fn parse_for(token: &str, family: Family) -> Result<Self, InspectError> {
        match family {
            Family::Text => Ok(Reference::Text(token.to_string())),
            Family::Numeric => token
                .trim()
                .parse::<i64>()
                .map(Reference::Integer)
                .map_err(|_| InspectError::InvalidReference {
                    token: token.to_string(),
                }),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Text(text) => f.write_str(text),
            Reference::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// A field value borrowed out of a loaded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_selector_parses_known_tokens() {
        assert_eq!("stdout".parse::<FieldSelector>(), Ok(FieldSelector::Stdout));
        assert_eq!("stderr".parse::<FieldSelector>(), Ok(FieldSelector::Stderr));
        assert_eq!("exit-code".parse::<FieldSelector>(), Ok(FieldSelector::ExitCode));
        assert_eq!("return-value".parse::<FieldSelector>(), Ok(FieldSelector::ExitCode));
    }

    #[test]
    fn field_selector_rejects_unknown_token() {
        let err = "STDOUT".parse::<FieldSelector>().expect_err("case sensitive");
        assert_eq!(
            err,
            InspectError::InvalidFieldSelector {
                token: "STDOUT".to_string()
            }
        );
    }

    #[test]
    fn text_operator_accepts_spaced_spellings() {
        assert_eq!("is not".parse::<TextOperator>(), Ok(TextOperator::IsNot));
        assert_eq!("contains not".parse::<TextOperator>(), Ok(TextOperator::ContainsNot));
    }

    #[test]
    fn numeric_operator_accepts_dashed_spellings() {
        assert_eq!("-lt".parse::<NumericOperator>(), Ok(NumericOperator::Lt));
        assert_eq!("--ge".parse::<NumericOperator>(), Ok(NumericOperator::Ge));
        assert!("---ge".parse::<NumericOperator>().is_err());
    }

    #[test]
    fn canonical_tokens_round_trip_through_as_str() {
        for family in [Family::Text, Family::Numeric] {
            for token in family.operator_tokens() {
                let field = match family {
                    Family::Text => FieldSelector::Stdout,
                    Family::Numeric => FieldSelector::ExitCode,
                };
                let op = Operator::parse_for(token, field).expect("canonical token");
                assert_eq!(op.as_str(), *token);
                assert_eq!(op.family(), family);
            }
        }
    }

    #[test]
    fn unknown_operator_is_invalid_operator() {
        let err = Operator::parse_for("greater", FieldSelector::ExitCode).expect_err("unknown");
        assert_eq!(
            err,
            InspectError::InvalidOperator {
                token: "greater".to_string(),
                family: Family::Numeric
            }
        );
    }

    #[test]
    fn operator_from_other_family_is_mismatch() {
        let err = Operator::parse_for("lt", FieldSelector::Stdout).expect_err("mismatch");
        assert_eq!(
            err,
            InspectError::OperatorFamilyMismatch {
                token: "lt".to_string(),
                field: FieldSelector::Stdout
            }
        );
        let err = Operator::parse_for("contains", FieldSelector::ExitCode).expect_err("mismatch");
        assert!(matches!(err, InspectError::OperatorFamilyMismatch { .. }));
    }

    #[test]
    fn numeric_reference_must_be_integer() {
        assert_eq!(
            Reference::parse_for(" -3 ", Family::Numeric),
            Ok(Reference::Integer(-3))
        );
        assert_eq!(
            Reference::parse_for("5.0", Family::Numeric),
            Err(InspectError::InvalidReference {
                token: "5.0".to_string()
            })
        );
    }

    #[test]
    fn text_reference_is_kept_verbatim() {
        assert_eq!(
            Reference::parse_for("  OK ", Family::Text),
            Ok(Reference::Text("  OK ".to_string()))
        );
    }
}
