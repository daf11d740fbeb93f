use super::error::ValidationError;
use super::rules::{self, RuleType, ValidationRule};
use super::types::{FieldValue, Request};

/// Validate a request against [`REQUEST_RULES`](super::REQUEST_RULES).
///
/// Returns every problem found (not just the first), ordered by field
/// declaration order.
pub fn validate(request: &Request) -> Result<(), ValidationError> {
    let errors = validate_fields(request.fields(), rules::rule_for);
    tracing::trace!(problems = errors.len(), "validated invoice request");
    match ValidationError::from_messages(errors) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Check named field values against rules resolved by `lookup`.
///
/// Fields without a rule pass through unchecked. A missing required field
/// yields a single message and no further checks.
pub fn validate_fields<'n, 'v, 'r, I, F>(fields: I, lookup: F) -> Vec<String>
where
    I: IntoIterator<Item = (&'n str, FieldValue<'v>)>,
    F: Fn(&str) -> Option<&'r ValidationRule>,
{
    let mut errors = Vec::new();

    for (name, value) in fields {
        let Some(rule) = lookup(name) else {
            continue;
        };

        if value.is_zero() {
            if rule.required {
                errors.push(format!("Required parameter [{name}] is missing"));
            }
            continue;
        }

        match (rule.kind, value) {
            (RuleType::Number | RuleType::Integer, FieldValue::Number(n)) => {
                if let Some(min) = rule.min {
                    if n < min {
                        errors.push(format!("Parameter [{name}] must be at least {min}"));
                    }
                }
                if let Some(max) = rule.max {
                    if n > max {
                        errors.push(format!("Parameter [{name}] must be at most {max}"));
                    }
                }
            }
            (RuleType::String, FieldValue::Str(s)) => {
                validate_string(name, s, rule, &mut errors);
            }
            _ => {}
        }

        if !rule.allowed.is_empty() {
            let rendered = value.render();
            if !rule.allowed.iter().any(|a| *a == rendered) {
                errors.push(format!(
                    "Parameter [{name}] must be one of: {}",
                    rule.allowed.join(", ")
                ));
            }
        }
    }

    errors
}

// Lengths are byte lengths, not character counts.
fn validate_string(name: &str, value: &str, rule: &ValidationRule, errors: &mut Vec<String>) {
    if let Some(min) = rule.min_length {
        if value.len() < min {
            errors.push(format!("Parameter [{name}] must be at least {min} characters"));
        }
    }
    if let Some(max) = rule.max_length {
        if value.len() > max {
            errors.push(format!("Parameter [{name}] must be at most {max} characters"));
        }
    }
    if let Some(format) = rule.format {
        if !format.matches(value) {
            errors.push(format!("Parameter [{name}] must be a valid {format}"));
        }
    }
}

impl Request {
    /// Shorthand for [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formats::Format;
    use crate::core::rules::lookup;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    static RULES: &[(&str, ValidationRule)] = &[
        ("color", ValidationRule::string().format(Format::HexColor)),
        ("size", ValidationRule::string().required().one_of(&["S", "M", "L"])),
        ("count", ValidationRule::integer().min(Decimal::ONE).max(Decimal::TEN)),
        ("level", ValidationRule::number().one_of(&["1", "2.5"])),
    ];

    fn check(fields: Vec<(&'static str, FieldValue<'static>)>) -> Vec<String> {
        validate_fields(fields, |n| lookup(RULES, n))
    }

    #[test]
    fn unknown_fields_pass_through() {
        assert!(check(vec![("comment", FieldValue::Str("anything"))]).is_empty());
    }

    #[test]
    fn required_missing_skips_other_checks() {
        assert_eq!(
            check(vec![("size", FieldValue::Str(""))]),
            vec!["Required parameter [size] is missing"]
        );
    }

    #[test]
    fn enumeration() {
        assert!(check(vec![("size", FieldValue::Str("M"))]).is_empty());
        assert_eq!(
            check(vec![("size", FieldValue::Str("XL"))]),
            vec!["Parameter [size] must be one of: S, M, L"]
        );
    }

    #[test]
    fn numeric_enumeration_uses_normalized_form() {
        assert!(check(vec![("level", FieldValue::Number(dec!(2.50)))]).is_empty());
        assert_eq!(
            check(vec![("level", FieldValue::Number(dec!(3)))]),
            vec!["Parameter [level] must be one of: 1, 2.5"]
        );
    }

    #[test]
    fn integer_bounds() {
        assert!(check(vec![("count", FieldValue::Number(dec!(10)))]).is_empty());
        assert_eq!(
            check(vec![("count", FieldValue::Number(dec!(11)))]),
            vec!["Parameter [count] must be at most 10"]
        );
        assert_eq!(
            check(vec![("count", FieldValue::Number(dec!(-2)))]),
            vec!["Parameter [count] must be at least 1"]
        );
    }

    #[test]
    fn optional_zero_skips_bounds() {
        // 0 is below the minimum of 1 but counts as "not provided".
        assert!(check(vec![("count", FieldValue::Number(Decimal::ZERO))]).is_empty());
    }

    #[test]
    fn format_mismatch() {
        assert_eq!(
            check(vec![("color", FieldValue::Str("red"))]),
            vec!["Parameter [color] must be a valid hexColor"]
        );
    }

    #[test]
    fn type_mismatch_is_ignored() {
        // A list where a string rule applies has no type-specific checks.
        assert!(check(vec![("color", FieldValue::List(3))]).is_empty());
    }

    #[test]
    fn messages_follow_field_order() {
        let errors = check(vec![
            ("count", FieldValue::Number(dec!(20))),
            ("color", FieldValue::Str("nope")),
            ("size", FieldValue::Str("")),
        ]);
        assert_eq!(
            errors,
            vec![
                "Parameter [count] must be at most 10",
                "Parameter [color] must be a valid hexColor",
                "Required parameter [size] is missing",
            ]
        );
    }

    #[test]
    fn state_length_counts_bytes() {
        let req = Request {
            from_state: "Ü".into(),
            ..Default::default()
        };
        // "Ü" is one character but two bytes, which is still within 2.
        let err = req.validate().unwrap_err();
        assert!(!err.mentions("from_state"));

        let req = Request {
            from_state: "ÜB".into(),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert!(
            err.errors
                .contains(&"Parameter [from_state] must be at most 2 characters".to_string())
        );
    }
}
