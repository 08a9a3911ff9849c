use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four listing categories that can be bulk imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingKind {
    TutoringProvider,
    SummerCamp,
    Internship,
    Job,
}

impl ListingKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::TutoringProvider,
            Self::SummerCamp,
            Self::Internship,
            Self::Job,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::TutoringProvider => "tutoring-provider",
            Self::SummerCamp => "summer-camp",
            Self::Internship => "internship",
            Self::Job => "job",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TutoringProvider => "Tutoring provider",
            Self::SummerCamp => "Summer camp",
            Self::Internship => "Internship",
            Self::Job => "Job",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing kind '{0}' (expected tutoring-provider, summer-camp, internship or job)")]
pub struct UnknownListingKind(pub String);

impl FromStr for ListingKind {
    type Err = UnknownListingKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "tutoring-provider" | "tutoring-providers" | "tutoring" => Ok(Self::TutoringProvider),
            "summer-camp" | "summer-camps" | "camp" | "camps" => Ok(Self::SummerCamp),
            "internship" | "internships" => Ok(Self::Internship),
            "job" | "jobs" => Ok(Self::Job),
            _ => Err(UnknownListingKind(value.to_string())),
        }
    }
}

/// Identifier handed back by the store once a listing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listing-{:06}", self.0)
    }
}

/// Accepted values for `deliveryMode` columns.
pub const DELIVERY_MODES: &[&str] = &["In-person", "Remote", "Hybrid"];
/// Accepted values for the internship `compensationType` column.
pub const COMPENSATION_TYPES: &[&str] = &["Paid", "Unpaid", "Stipend"];
/// Accepted values for the job `salaryType` column.
pub const SALARY_TYPES: &[&str] = &["Hourly", "Salary", "Stipend"];

/// Tutoring business or individual tutor awaiting moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringProviderInput {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub description: String,
    pub categories: Vec<String>,
    pub subjects: Vec<String>,
    pub grade_levels: Vec<String>,
    pub delivery_mode: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hourly_rate: Option<i64>,
    pub years_experience: Option<i64>,
    pub offers_free_trial: Option<bool>,
    pub background_checked: Option<bool>,
    pub is_approved: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummerCampInput {
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub camp_type: Option<String>,
    pub delivery_mode: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub price: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub application_deadline: Option<NaiveDate>,
    pub overnight: Option<bool>,
    pub financial_aid: Option<bool>,
    pub is_approved: bool,
    pub is_active: bool,
    pub application_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipInput {
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub types: Vec<String>,
    pub delivery_mode: Option<String>,
    pub compensation_type: Option<String>,
    pub stipend: Option<i64>,
    pub min_age: Option<i64>,
    pub hours_per_week: Option<i64>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub application_deadline: Option<NaiveDate>,
    pub application_url: Option<String>,
    pub contact_email: Option<String>,
    pub academic_credit: Option<bool>,
    pub is_approved: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub delivery_mode: Option<String>,
    pub salary_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub min_age: Option<i64>,
    pub hours_per_week: Option<i64>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub application_url: Option<String>,
    pub contact_email: Option<String>,
    pub seasonal: Option<bool>,
    pub is_approved: bool,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_singular_plural_and_snake_case() {
        assert_eq!(
            "tutoring_providers".parse::<ListingKind>().expect("parses"),
            ListingKind::TutoringProvider
        );
        assert_eq!(
            " Summer-Camps ".parse::<ListingKind>().expect("parses"),
            ListingKind::SummerCamp
        );
        assert_eq!("jobs".parse::<ListingKind>().expect("parses"), ListingKind::Job);

        let error = "forum-posts".parse::<ListingKind>().expect_err("rejects");
        assert_eq!(error.0, "forum-posts");
    }

    #[test]
    fn kind_round_trips_through_slug() {
        for kind in ListingKind::ordered() {
            assert_eq!(kind.slug().parse::<ListingKind>().expect("slug parses"), kind);
        }
    }

    #[test]
    fn tutoring_input_serializes_type_column_name() {
        let input = TutoringProviderInput {
            name: "Acme Tutors".to_string(),
            provider_type: Some("business".to_string()),
            description: "Great tutors".to_string(),
            categories: vec!["Mathematics".to_string()],
            subjects: Vec::new(),
            grade_levels: Vec::new(),
            delivery_mode: None,
            address: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: None,
            phone: None,
            email: None,
            website: None,
            hourly_rate: None,
            years_experience: None,
            offers_free_trial: None,
            background_checked: None,
            is_approved: false,
            is_active: true,
        };

        let json = serde_json::to_value(&input).expect("serializes");
        assert_eq!(json["type"], "business");
        assert_eq!(json["isApproved"], false);
        assert_eq!(json["zipCode"], serde_json::Value::Null);
    }
}
