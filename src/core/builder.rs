use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::*;
use super::validation;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builder for invoice generation requests.
///
/// ```
/// use invoicegen::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let request = RequestBuilder::new("INV-2024-001")
///     .issue_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .from(Address::new("ACME Inc.", "1 Main St", "Springfield", "IL", "62701"))
///     .to(Address::new("Globex Corp", "42 Elm Ave", "Shelbyville", "IL", "62565"))
///     .sales_tax(dec!(8.25))
///     .add_item(LineItem::new(dec!(10), "Consulting", dec!(150)))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.date, "2024-01-15");
/// ```
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new(invoice_number: impl Into<String>) -> Self {
        Self {
            request: Request {
                invoice_number: invoice_number.into(),
                ..Request::default()
            },
        }
    }

    /// Invoice date as a raw string. Checked against `YYYY-MM-DD` on build.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.request.date = date.into();
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.request.date = date.format(DATE_FORMAT).to_string();
        self
    }

    /// Due date as a raw string. Checked against `YYYY-MM-DD` on build.
    pub fn due_date(mut self, date: impl Into<String>) -> Self {
        self.request.due_date = date.into();
        self
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.request.due_date = date.format(DATE_FORMAT).to_string();
        self
    }

    /// Issuer of the invoice.
    pub fn from(mut self, address: Address) -> Self {
        self.request.from_name = address.name;
        self.request.from_street = address.street;
        self.request.from_city = address.city;
        self.request.from_state = address.state;
        self.request.from_zip = address.zip;
        self
    }

    /// Recipient of the invoice.
    pub fn to(mut self, address: Address) -> Self {
        self.request.to_name = address.name;
        self.request.to_street = address.street;
        self.request.to_city = address.city;
        self.request.to_state = address.state;
        self.request.to_zip = address.zip;
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.request.job = job.into();
        self
    }

    pub fn payment_terms(mut self, terms: impl Into<String>) -> Self {
        self.request.payment_terms = terms.into();
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.request.discount = amount;
        self
    }

    /// Sales tax rate in percent.
    pub fn sales_tax(mut self, percent: Decimal) -> Self {
        self.request.sales_tax = percent;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.request.currency = code.into();
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.request.items.push(item);
        self
    }

    /// Build and validate the request.
    pub fn build(self) -> Result<Request, ValidationError> {
        validation::validate(&self.request)?;
        Ok(self.request)
    }

    /// Build without validation.
    pub fn build_unchecked(self) -> Request {
        self.request
    }
}
