use super::errors::ProductError;

/// Opaque identifier assigned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Parses an id coming from a form field. Blank input means no id.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProductError::IdMissing);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Constructor for ids already issued by the repository (no validation).
    pub fn from_repository(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative, finite unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ProductError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProductError::PriceInvalid);
        }
        Ok(Self(value))
    }

    /// Parses the text of a price input field.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ProductError::PriceInvalid)?;
        Self::new(value)
    }

    /// Constructor for prices already stored by the repository (no validation).
    pub fn from_repository(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Renders the price for display, rounded to two decimals. Exact
    /// half-cent values round away from zero (`9.125` shows as `9.13`).
    pub fn format_with(&self, currency_prefix: &str) -> String {
        format!("{}{}", currency_prefix, two_decimals(self.0))
    }
}

/// `{:.2}` already rounds the exact binary value correctly, except that it
/// breaks exact ties toward the even digit. A tie at the third decimal is
/// only representable as an odd multiple of 1/8, which is checked exactly.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    let is_half_cent_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_half_cent_tie {
        return format!("{:.2}", value);
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Shortest textual form of the stored value (`9.5`, not `9.50`), which is
/// what gets copied into the edit form.
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
