use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::fields::Submission;
use super::reference;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Why a submission was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Names of the required fields that were absent or blank.
    MissingFields(Vec<&'static str>),
    InvalidEmail,
    InvalidPhone(String),
    InvalidCountry(String),
    /// Postal code, then country.
    InvalidPostal(String, String),
    InvalidDateFormat,
    FutureDateOfBirth,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Rejection::InvalidEmail => write!(f, "Invalid email address"),
            Rejection::InvalidPhone(country) => {
                write!(f, "Invalid phone number for country: {country}")
            }
            Rejection::InvalidCountry(name) => write!(f, "Invalid country: {name}"),
            Rejection::InvalidPostal(code, country) => {
                write!(f, "Invalid postal code '{code}' for country: {country}")
            }
            Rejection::InvalidDateFormat => write!(f, "Invalid date format. Use YYYY-MM-DD."),
            Rejection::FutureDateOfBirth => write!(f, "Date of birth cannot be in the future"),
        }
    }
}

impl std::error::Error for Rejection {}

/// An accepted, normalized submission ready for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISO-8601 date.
    pub dob: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
    pub institution: Option<String>,
    pub student_id: Option<String>,
    pub message: Option<String>,
}

impl From<ValidatedRecord> for Submission {
    fn from(record: ValidatedRecord) -> Self {
        Submission {
            name: Some(record.name),
            email: Some(record.email),
            phone: Some(record.phone),
            dob: record.dob,
            street: record.street,
            city: record.city,
            state: record.state,
            postal: record.postal,
            country: record.country,
            institution: record.institution,
            student_id: record.student_id,
            message: record.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Phone, country and postal checks. These depend on the declared country.
    pub country_checks: bool,
    pub email_check: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            country_checks: true,
            email_check: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: PipelineOptions,
}

impl Validator {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Validate against today's date in UTC.
    pub fn validate(&self, submission: &Submission) -> Result<ValidatedRecord, Rejection> {
        self.validate_on(submission, Utc::now().date_naive())
    }

    /// Run every check in order and stop at the first failure.
    pub fn validate_on(
        &self,
        submission: &Submission,
        today: NaiveDate,
    ) -> Result<ValidatedRecord, Rejection> {
        let name = trimmed(&submission.name).and(submission.name.clone());
        let email = trimmed(&submission.email).and(submission.email.clone());
        let phone = trimmed(&submission.phone);

        let country_present =
            !self.options.country_checks || trimmed(&submission.country).is_some();

        let missing: Vec<&'static str> = [
            ("name", name.is_some()),
            ("email", email.is_some()),
            ("phone", phone.is_some()),
            ("country", country_present),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| field)
        .collect();

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) if missing.is_empty() => {
                self.check_and_normalize(submission, name, email, phone, today)
            }
            _ => Err(Rejection::MissingFields(missing)),
        }
    }

    fn check_and_normalize(
        &self,
        submission: &Submission,
        name: String,
        email: String,
        phone: String,
        today: NaiveDate,
    ) -> Result<ValidatedRecord, Rejection> {
        if self.options.email_check && !EMAIL_RE.is_match(email.trim()) {
            return Err(Rejection::InvalidEmail);
        }

        let country = trimmed(&submission.country);
        let postal = trimmed(&submission.postal);

        if self.options.country_checks {
            let country = country.as_deref().unwrap_or_default();
            let postal = postal.as_deref().unwrap_or_default();

            if !reference::is_valid_phone(&phone, country) {
                return Err(Rejection::InvalidPhone(country.to_string()));
            }
            if !reference::is_known_country(country) {
                return Err(Rejection::InvalidCountry(country.to_string()));
            }
            if !reference::is_valid_postal(postal, country) {
                return Err(Rejection::InvalidPostal(
                    postal.to_string(),
                    country.to_string(),
                ));
            }
        }

        let dob = match trimmed(&submission.dob) {
            Some(raw) => Some(parse_dob(&raw, today)?),
            None => None,
        };

        Ok(ValidatedRecord {
            name,
            email,
            phone,
            dob: dob.map(|d| d.format("%Y-%m-%d").to_string()),
            street: submission.street.clone(),
            city: submission.city.clone(),
            state: submission.state.clone(),
            postal,
            country,
            institution: submission.institution.clone(),
            student_id: submission.student_id.clone(),
            message: submission.message.clone(),
        })
    }
}

fn parse_dob(raw: &str, today: NaiveDate) -> Result<NaiveDate, Rejection> {
    let dob = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Rejection::InvalidDateFormat)?;
    if dob > today {
        return Err(Rejection::FutureDateOfBirth);
    }
    Ok(dob)
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
