use std::{error::Error, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use skate_contest_entities::prelude::*;

/// What a rider submits on the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub address: Address,
    #[serde(default)]
    pub is_sponsored: bool,
    #[serde(default)]
    pub sponsor_details: Option<String>,
    pub categories: Vec<Category>,
    /// Generated on registration when absent.
    #[serde(default)]
    pub access_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationProblem {
    MissingField(&'static str),
    NoCategories,
    SponsoredAndAmateur,
    SponsorshipMismatch,
}

impl Display for ValidationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationProblem::MissingField(field) => write!(f, "{} is required", field),
            ValidationProblem::NoCategories => write!(f, "Please select at least one category"),
            ValidationProblem::SponsoredAndAmateur => write!(
                f,
                "{} and {} can not be combined",
                Category::sponsored(),
                Category::amateur()
            ),
            ValidationProblem::SponsorshipMismatch => write!(
                f,
                "Sponsored riders must start in {} and only they may",
                Category::sponsored()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationError {
    pub problems: Vec<ValidationProblem>,
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid registration: {}", self.problems.iter().join("; "))
    }
}

impl Error for RegistrationError {}

impl RegistrationData {
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let mut problems = vec![];

        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Street", &self.address.street),
            ("House number", &self.address.house_number),
            ("Postal code", &self.address.postal_code),
            ("City", &self.address.city),
        ];
        problems.extend(
            required
                .iter()
                .filter(|(_, value)| value.trim().is_empty())
                .map(|(name, _)| ValidationProblem::MissingField(*name)),
        );

        if self.categories.is_empty() {
            problems.push(ValidationProblem::NoCategories);
        }

        let sponsored = self.categories.contains(&Category::sponsored());
        if sponsored && self.categories.contains(&Category::amateur()) {
            problems.push(ValidationProblem::SponsoredAndAmateur);
        }
        if sponsored != self.is_sponsored {
            problems.push(ValidationProblem::SponsorshipMismatch);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(RegistrationError { problems })
        }
    }
}
