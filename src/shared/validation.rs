use rust_decimal::Decimal;
use std::str::FromStr;

/// Money columns are `NUMERIC(12, 2)`.
const MONEY_SCALE: u32 = 2;
const MONEY_LIMIT: i64 = 10_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Collects every absent or blank required field so a single error can name all of them.
/// Values longer than their column are reported after that, first offender only.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
    too_long: Option<ValidationError>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed text of at most `max_chars`; blank counts as missing.
    pub fn text(&mut self, field: &'static str, value: Option<String>, max_chars: usize) -> String {
        match optional_text(value) {
            Some(v) => {
                if self.too_long.is_none() {
                    self.too_long = check_length(field, &v, max_chars).err();
                }
                v
            }
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    pub fn value<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        match value {
            Some(v) => v,
            None => {
                self.missing.push(field);
                T::default()
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if !self.missing.is_empty() {
            return Err(ValidationError::MissingFields(self.missing));
        }
        match self.too_long {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Counts chars, not bytes, like Postgres `VARCHAR(n)`.
pub fn check_length(field: &'static str, value: &str, max_chars: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max_chars {
        return Err(ValidationError::invalid(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
    Ok(())
}

/// Trims; blank becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Rounded to cents; must stay positive and fit the column.
pub fn positive_amount(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    let value = value.round_dp(MONEY_SCALE);
    if value <= Decimal::ZERO {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    if value >= Decimal::from(MONEY_LIMIT) {
        return Err(ValidationError::invalid(field, "is too large"));
    }
    Ok(value)
}

/// Money sent as form text, e.g. `"1500"` or `"1499.50"`.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|_| ValidationError::invalid(field, "must be a number"))?;
    positive_amount(field, value)
}
