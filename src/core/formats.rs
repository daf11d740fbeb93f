//! Named string formats checked by the validator.
//!
//! Patterns are compiled once, on first use, and shared read-only for the
//! life of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// A named string shape a parameter may be required to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `YYYY-MM-DD`, digits only. No calendar check.
    Date,
    /// `local@domain.tld`, no whitespace.
    Email,
    /// Anything starting with `http://` or `https://`.
    Url,
    /// Dotted-quad IPv4 or uncompressed 8-group IPv6.
    Ip,
    /// `#abc` / `#aabbcc`, the `#` being optional.
    HexColor,
}

// Local part, domain and TLD exclude ASCII whitespace and '@'.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\t\n\x0C\r @]+@[^\t\n\x0C\r @]+\.[^\t\n\x0C\r @]+$")
        .expect("email pattern compiles")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("url pattern compiles"));

static IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        r"|^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$",
    ))
    .expect("ip pattern compiles")
});

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hexColor pattern compiles")
});

impl Format {
    /// Every known format.
    pub const ALL: [Format; 5] = [
        Format::Date,
        Format::Email,
        Format::Url,
        Format::Ip,
        Format::HexColor,
    ];

    /// Name used in rule tables and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Email => "email",
            Self::Url => "url",
            Self::Ip => "ip",
            Self::HexColor => "hexColor",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Date => &*DATE,
            Self::Email => &*EMAIL,
            Self::Url => &*URL,
            Self::Ip => &*IP,
            Self::HexColor => &*HEX_COLOR,
        }
    }

    /// Check whether `value` has this format.
    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when parsing a format name that is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format '{}'", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
