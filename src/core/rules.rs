//! Per-parameter constraints for the invoice generator endpoint.

use rust_decimal::Decimal;

use super::formats::Format;

/// Value type a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    String,
    Number,
    Integer,
    Array,
}

/// Constraints for one request parameter.
///
/// Bounds that are `None` are not checked. An empty `allowed` list means
/// any value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub kind: RuleType,
    pub required: bool,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub allowed: &'static [&'static str],
}

impl ValidationRule {
    const fn of(kind: RuleType) -> Self {
        Self {
            kind,
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            format: None,
            allowed: &[],
        }
    }

    pub const fn string() -> Self {
        Self::of(RuleType::String)
    }

    pub const fn number() -> Self {
        Self::of(RuleType::Number)
    }

    pub const fn integer() -> Self {
        Self::of(RuleType::Integer)
    }

    pub const fn array() -> Self {
        Self::of(RuleType::Array)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min(mut self, min: Decimal) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: Decimal) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }
}

/// Rules for [`Request`](super::Request), keyed by wire name.
pub static REQUEST_RULES: &[(&str, ValidationRule)] = &[
    ("invoiceNumber", ValidationRule::string().required()),
    ("date", ValidationRule::string().format(Format::Date)),
    ("from_name", ValidationRule::string().required()),
    ("from_street", ValidationRule::string().required()),
    ("from_city", ValidationRule::string().required()),
    ("from_state", ValidationRule::string().required().max_length(2)),
    (
        "from_zip",
        ValidationRule::string().required().min_length(5).max_length(10),
    ),
    ("to_name", ValidationRule::string().required()),
    ("to_street", ValidationRule::string().required()),
    ("to_city", ValidationRule::string().required()),
    ("to_state", ValidationRule::string().required().max_length(2)),
    (
        "to_zip",
        ValidationRule::string().required().min_length(5).max_length(10),
    ),
    ("job", ValidationRule::string()),
    ("paymentTerms", ValidationRule::string()),
    ("dueDate", ValidationRule::string().format(Format::Date)),
    ("discount", ValidationRule::number().min(Decimal::ZERO)),
    (
        "salesTax",
        ValidationRule::number()
            .min(Decimal::ZERO)
            .max(Decimal::ONE_HUNDRED),
    ),
    ("currency", ValidationRule::string()),
    ("items", ValidationRule::array().required()),
];

/// Look up the rule for a request parameter.
pub fn rule_for(name: &str) -> Option<&'static ValidationRule> {
    lookup(REQUEST_RULES, name)
}

pub(crate) fn lookup<'a>(
    table: &'a [(&str, ValidationRule)],
    name: &str,
) -> Option<&'a ValidationRule> {
    table.iter().find(|(n, _)| *n == name).map(|(_, r)| r)
}
