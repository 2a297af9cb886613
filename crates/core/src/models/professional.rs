use std::{fmt, fs, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::availability::{AvailabilityWindow, ProfessionalAvailability};

/// A professional as listed in the marketplace, with the availability the
/// booking screen is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub coach_type: Option<String>,
    #[serde(default)]
    pub price_number: i64,
    #[serde(default)]
    pub price_currency: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Vec<ProfessionalAvailability>,
    pub review_size: String,
    #[serde(default)]
    pub reviews: Vec<ProfessionalReview>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Professional {
    /// Loads a professional record from a JSON file.
    ///
    /// # Errors
    ///
    /// * `BookingError::NotFound` - the file does not exist
    /// * `BookingError::Validation` - the file is not a valid professional record
    /// * `BookingError::Internal` - any other I/O failure
    pub fn from_json_file(path: impl AsRef<Path>) -> BookingResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                BookingError::NotFound(format!("Professional file {} not found", path.display()))
            }
            _ => BookingError::Internal(eyre::Report::new(e)),
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            BookingError::Validation(format!("Invalid professional in {}: {}", path.display(), e))
        })
    }

    /// First and last name joined by a space, skipping missing parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn price(&self) -> String {
        format!("{} {}", self.price_currency, self.price_number)
    }

    pub fn currency(&self) -> BookingResult<Currency> {
        self.price_currency.parse()
    }

    /// Converts the API availability into booking windows, failing on the
    /// first invalid entry.
    pub fn availability_windows(&self) -> BookingResult<Vec<AvailabilityWindow>> {
        self.availability
            .iter()
            .map(ProfessionalAvailability::to_window)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalReview {
    pub id: i64,
    pub user: ReviewUser,
    pub rate: i32,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Currencies a professional can price sessions in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
}

impl Currency {
    pub fn short_name(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Currency {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(BookingError::Validation(format!(
                "Unsupported currency: {}",
                other
            ))),
        }
    }
}
