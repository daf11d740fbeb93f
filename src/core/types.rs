use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for one invoice generation call.
///
/// Field order is the order parameters are validated and reported in.
/// Empty strings, zero numbers and empty lists count as "not provided";
/// an explicit `0` discount is indistinguishable from no discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Invoice number (required).
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    /// Invoice date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,
    /// Issuer name (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from_name: String,
    /// Issuer street address (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from_street: String,
    /// Issuer city (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from_city: String,
    /// Issuer state, at most 2 characters (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from_state: String,
    /// Issuer zip code, 5 to 10 characters (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from_zip: String,
    /// Recipient name (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_name: String,
    /// Recipient street address (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_street: String,
    /// Recipient city (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_city: String,
    /// Recipient state, at most 2 characters (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_state: String,
    /// Recipient zip code, 5 to 10 characters (required).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_zip: String,
    /// Job or project the invoice belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job: String,
    /// Free-text payment terms.
    #[serde(rename = "paymentTerms", skip_serializing_if = "String::is_empty")]
    pub payment_terms: String,
    /// Due date, `YYYY-MM-DD`.
    #[serde(rename = "dueDate", skip_serializing_if = "String::is_empty")]
    pub due_date: String,
    /// Discount amount, not negative.
    #[serde(
        with = "rust_decimal::serde::float",
        skip_serializing_if = "Decimal::is_zero"
    )]
    pub discount: Decimal,
    /// Sales tax rate in percent, 0 to 100.
    #[serde(
        rename = "salesTax",
        with = "rust_decimal::serde::float",
        skip_serializing_if = "Decimal::is_zero"
    )]
    pub sales_tax: Decimal,
    /// Currency of the amounts.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency: String,
    /// Invoice lines (required, at least one).
    pub items: Vec<LineItem>,
}

/// One invoiced line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "qty", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(quantity: Decimal, description: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            quantity,
            description: description.into(),
            unit_price,
        }
    }

    /// Quantity times unit price.
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Postal address of the issuer or recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

/// Borrowed, typed view of one request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Number(Decimal),
    /// A list, carried as its length.
    List(usize),
}

impl FieldValue<'_> {
    /// Whether the value is its type's empty representation.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Number(n) => n.is_zero(),
            Self::List(len) => *len == 0,
        }
    }

    /// String form used for enumeration checks.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => (*s).to_string(),
            Self::Number(n) => n.normalize().to_string(),
            Self::List(len) => len.to_string(),
        }
    }
}

impl Request {
    /// Every parameter with its wire name, in declaration order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 19] {
        use FieldValue::*;
        [
            ("invoiceNumber", Str(&self.invoice_number)),
            ("date", Str(&self.date)),
            ("from_name", Str(&self.from_name)),
            ("from_street", Str(&self.from_street)),
            ("from_city", Str(&self.from_city)),
            ("from_state", Str(&self.from_state)),
            ("from_zip", Str(&self.from_zip)),
            ("to_name", Str(&self.to_name)),
            ("to_street", Str(&self.to_street)),
            ("to_city", Str(&self.to_city)),
            ("to_state", Str(&self.to_state)),
            ("to_zip", Str(&self.to_zip)),
            ("job", Str(&self.job)),
            ("paymentTerms", Str(&self.payment_terms)),
            ("dueDate", Str(&self.due_date)),
            ("discount", Number(self.discount)),
            ("salesTax", Number(self.sales_tax)),
            ("currency", Str(&self.currency)),
            ("items", List(self.items.len())),
        ]
    }

    /// Sum of all line totals, before discount and tax.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::total).sum()
    }
}

/// Reply from the invoice generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub status: String,
    /// Error payload, if the service sent one.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ResponseData,
}

impl Response {
    /// Whether the service reported success.
    pub fn is_success(&self) -> bool {
        self.status == "ok"
    }
}

/// The generated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseData {
    #[serde(rename = "pdfName")]
    pub pdf_name: String,
    /// Lifetime of the download link, as reported by the service.
    pub expires: i64,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
}

/// Body of a non-success reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: String,
    pub error: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
