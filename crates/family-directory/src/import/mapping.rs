use super::coercion::{optional_text, parse_bool, parse_date, parse_integer, parse_list};
use super::tokenizer::RawRow;
use crate::listings::{
    InternshipInput, JobInput, ListingId, ListingKind, ListingStore, StoreError, SummerCampInput,
    TutoringProviderInput, COMPENSATION_TYPES, DELIVERY_MODES, SALARY_TYPES,
};

/// Value of a required column as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl RequiredValue<'_> {
    pub fn is_present(&self) -> bool {
        match self {
            RequiredValue::Text(value) => !value.trim().is_empty(),
            RequiredValue::List(items) => !items.is_empty(),
        }
    }
}

/// Enum-restricted column holding text outside its literal set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnumValue {
    pub column: &'static str,
    pub value: String,
}

/// Field-mapping descriptor for one listing kind.
///
/// Implementors define which headers feed which coercion, which columns are
/// mandatory, and which store method receives the finished record. The
/// import pipeline is generic over this trait.
pub trait ImportTarget: Sized {
    const KIND: ListingKind;
    /// Recognized headers, in template order.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &RawRow) -> Self;

    fn required_fields(&self) -> Vec<(&'static str, RequiredValue<'_>)>;

    fn enum_fields(&self) -> Vec<(&'static str, Option<&str>, &'static [&'static str])> {
        Vec::new()
    }

    fn persist<S: ListingStore + ?Sized>(self, store: &S) -> Result<ListingId, StoreError>;

    fn required_field_names(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    fn has_required_fields(&self) -> bool {
        self.required_fields()
            .iter()
            .all(|(_, value)| value.is_present())
    }

    fn unknown_enum_values(&self) -> Vec<UnknownEnumValue> {
        self.enum_fields()
            .into_iter()
            .filter_map(|(column, value, allowed)| {
                let value = value?;
                (!allowed.iter().any(|literal| *literal == value)).then(|| UnknownEnumValue {
                    column,
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

fn text(row: &RawRow, column: &str) -> String {
    row.get(column).trim().to_string()
}

impl ImportTarget for TutoringProviderInput {
    const KIND: ListingKind = ListingKind::TutoringProvider;
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "type",
        "description",
        "categories",
        "subjects",
        "gradeLevels",
        "deliveryMode",
        "address",
        "city",
        "state",
        "zipCode",
        "phone",
        "email",
        "website",
        "hourlyRate",
        "yearsExperience",
        "offersFreeTrial",
        "backgroundChecked",
    ];

    fn from_row(row: &RawRow) -> Self {
        Self {
            name: text(row, "name"),
            provider_type: optional_text(row.get("type")),
            description: text(row, "description"),
            categories: parse_list(row.get("categories")),
            subjects: parse_list(row.get("subjects")),
            grade_levels: parse_list(row.get("gradeLevels")),
            delivery_mode: optional_text(row.get("deliveryMode")),
            address: optional_text(row.get("address")),
            city: text(row, "city"),
            state: text(row, "state"),
            zip_code: optional_text(row.get("zipCode")),
            phone: optional_text(row.get("phone")),
            email: optional_text(row.get("email")),
            website: optional_text(row.get("website")),
            hourly_rate: parse_integer(row.get("hourlyRate")),
            years_experience: parse_integer(row.get("yearsExperience")),
            offers_free_trial: parse_bool(row.get("offersFreeTrial")),
            background_checked: parse_bool(row.get("backgroundChecked")),
            is_approved: false,
            is_active: true,
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, RequiredValue<'_>)> {
        vec![
            ("name", RequiredValue::Text(&self.name)),
            ("description", RequiredValue::Text(&self.description)),
            ("city", RequiredValue::Text(&self.city)),
            ("state", RequiredValue::Text(&self.state)),
            ("categories", RequiredValue::List(&self.categories)),
        ]
    }

    fn enum_fields(&self) -> Vec<(&'static str, Option<&str>, &'static [&'static str])> {
        vec![("deliveryMode", self.delivery_mode.as_deref(), DELIVERY_MODES)]
    }

    fn persist<S: ListingStore + ?Sized>(self, store: &S) -> Result<ListingId, StoreError> {
        store.create_tutoring_provider(self)
    }
}

impl ImportTarget for SummerCampInput {
    const KIND: ListingKind = ListingKind::SummerCamp;
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "categories",
        "campType",
        "deliveryMode",
        "address",
        "city",
        "state",
        "zipCode",
        "phone",
        "email",
        "website",
        "minAge",
        "maxAge",
        "price",
        "startDate",
        "endDate",
        "applicationDeadline",
        "overnight",
        "financialAid",
    ];

    fn from_row(row: &RawRow) -> Self {
        Self {
            name: text(row, "name"),
            description: text(row, "description"),
            categories: parse_list(row.get("categories")),
            camp_type: optional_text(row.get("campType")),
            delivery_mode: optional_text(row.get("deliveryMode")),
            address: optional_text(row.get("address")),
            city: text(row, "city"),
            state: text(row, "state"),
            zip_code: optional_text(row.get("zipCode")),
            phone: optional_text(row.get("phone")),
            email: optional_text(row.get("email")),
            website: optional_text(row.get("website")),
            min_age: parse_integer(row.get("minAge")),
            max_age: parse_integer(row.get("maxAge")),
            price: parse_integer(row.get("price")),
            start_date: parse_date(row.get("startDate")),
            end_date: parse_date(row.get("endDate")),
            application_deadline: parse_date(row.get("applicationDeadline")),
            overnight: parse_bool(row.get("overnight")),
            financial_aid: parse_bool(row.get("financialAid")),
            is_approved: false,
            is_active: true,
            application_available: true,
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, RequiredValue<'_>)> {
        vec![
            ("name", RequiredValue::Text(&self.name)),
            ("description", RequiredValue::Text(&self.description)),
            ("city", RequiredValue::Text(&self.city)),
            ("state", RequiredValue::Text(&self.state)),
            ("categories", RequiredValue::List(&self.categories)),
        ]
    }

    fn enum_fields(&self) -> Vec<(&'static str, Option<&str>, &'static [&'static str])> {
        vec![("deliveryMode", self.delivery_mode.as_deref(), DELIVERY_MODES)]
    }

    fn persist<S: ListingStore + ?Sized>(self, store: &S) -> Result<ListingId, StoreError> {
        store.create_summer_camp(self)
    }
}

impl ImportTarget for InternshipInput {
    const KIND: ListingKind = ListingKind::Internship;
    const COLUMNS: &'static [&'static str] = &[
        "companyName",
        "title",
        "description",
        "types",
        "deliveryMode",
        "compensationType",
        "stipend",
        "minAge",
        "hoursPerWeek",
        "address",
        "city",
        "state",
        "zipCode",
        "startDate",
        "endDate",
        "applicationDeadline",
        "applicationUrl",
        "contactEmail",
        "academicCredit",
    ];

    fn from_row(row: &RawRow) -> Self {
        Self {
            company_name: text(row, "companyName"),
            title: text(row, "title"),
            description: text(row, "description"),
            types: parse_list(row.get("types")),
            delivery_mode: optional_text(row.get("deliveryMode")),
            compensation_type: optional_text(row.get("compensationType")),
            stipend: parse_integer(row.get("stipend")),
            min_age: parse_integer(row.get("minAge")),
            hours_per_week: parse_integer(row.get("hoursPerWeek")),
            address: optional_text(row.get("address")),
            city: text(row, "city"),
            state: text(row, "state"),
            zip_code: optional_text(row.get("zipCode")),
            start_date: parse_date(row.get("startDate")),
            end_date: parse_date(row.get("endDate")),
            application_deadline: parse_date(row.get("applicationDeadline")),
            application_url: optional_text(row.get("applicationUrl")),
            contact_email: optional_text(row.get("contactEmail")),
            academic_credit: parse_bool(row.get("academicCredit")),
            is_approved: false,
            is_active: true,
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, RequiredValue<'_>)> {
        vec![
            ("companyName", RequiredValue::Text(&self.company_name)),
            ("title", RequiredValue::Text(&self.title)),
            ("description", RequiredValue::Text(&self.description)),
            ("city", RequiredValue::Text(&self.city)),
            ("state", RequiredValue::Text(&self.state)),
            ("types", RequiredValue::List(&self.types)),
        ]
    }

    fn enum_fields(&self) -> Vec<(&'static str, Option<&str>, &'static [&'static str])> {
        vec![
            ("deliveryMode", self.delivery_mode.as_deref(), DELIVERY_MODES),
            (
                "compensationType",
                self.compensation_type.as_deref(),
                COMPENSATION_TYPES,
            ),
        ]
    }

    fn persist<S: ListingStore + ?Sized>(self, store: &S) -> Result<ListingId, StoreError> {
        store.create_internship(self)
    }
}

impl ImportTarget for JobInput {
    const KIND: ListingKind = ListingKind::Job;
    const COLUMNS: &'static [&'static str] = &[
        "companyName",
        "title",
        "description",
        "categories",
        "deliveryMode",
        "salaryType",
        "salaryMin",
        "salaryMax",
        "minAge",
        "hoursPerWeek",
        "address",
        "city",
        "state",
        "zipCode",
        "applicationDeadline",
        "applicationUrl",
        "contactEmail",
        "seasonal",
    ];

    fn from_row(row: &RawRow) -> Self {
        Self {
            company_name: text(row, "companyName"),
            title: text(row, "title"),
            description: text(row, "description"),
            categories: parse_list(row.get("categories")),
            delivery_mode: optional_text(row.get("deliveryMode")),
            salary_type: optional_text(row.get("salaryType")),
            salary_min: parse_integer(row.get("salaryMin")),
            salary_max: parse_integer(row.get("salaryMax")),
            min_age: parse_integer(row.get("minAge")),
            hours_per_week: parse_integer(row.get("hoursPerWeek")),
            address: optional_text(row.get("address")),
            city: text(row, "city"),
            state: text(row, "state"),
            zip_code: optional_text(row.get("zipCode")),
            application_deadline: parse_date(row.get("applicationDeadline")),
            application_url: optional_text(row.get("applicationUrl")),
            contact_email: optional_text(row.get("contactEmail")),
            seasonal: parse_bool(row.get("seasonal")),
            is_approved: false,
            is_active: true,
        }
    }

    fn required_fields(&self) -> Vec<(&'static str, RequiredValue<'_>)> {
        vec![
            ("companyName", RequiredValue::Text(&self.company_name)),
            ("title", RequiredValue::Text(&self.title)),
            ("description", RequiredValue::Text(&self.description)),
            ("city", RequiredValue::Text(&self.city)),
            ("state", RequiredValue::Text(&self.state)),
            ("categories", RequiredValue::List(&self.categories)),
        ]
    }

    fn enum_fields(&self) -> Vec<(&'static str, Option<&str>, &'static [&'static str])> {
        vec![
            ("deliveryMode", self.delivery_mode.as_deref(), DELIVERY_MODES),
            ("salaryType", self.salary_type.as_deref(), SALARY_TYPES),
        ]
    }

    fn persist<S: ListingStore + ?Sized>(self, store: &S) -> Result<ListingId, StoreError> {
        store.create_job(self)
    }
}

/// Recognized headers for `kind`, in template order.
pub fn columns_for(kind: ListingKind) -> &'static [&'static str] {
    match kind {
        ListingKind::TutoringProvider => TutoringProviderInput::COLUMNS,
        ListingKind::SummerCamp => SummerCampInput::COLUMNS,
        ListingKind::Internship => InternshipInput::COLUMNS,
        ListingKind::Job => JobInput::COLUMNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn tutoring_row_forces_moderation_flags() {
        let input = TutoringProviderInput::from_row(&row(&[
            ("name", "Acme Tutors"),
            ("categories", "Mathematics;English"),
            ("offersFreeTrial", "yes"),
            ("hourlyRate", "45/hr"),
            ("isApproved", "true"),
            ("isActive", "false"),
        ]));

        assert_eq!(input.categories, vec!["Mathematics", "English"]);
        assert_eq!(input.offers_free_trial, Some(true));
        assert_eq!(input.hourly_rate, Some(45));
        assert!(!input.is_approved);
        assert!(input.is_active);
        assert!(input.website.is_none());
    }

    #[test]
    fn camp_row_parses_dates_and_marks_applications_open() {
        let input = SummerCampInput::from_row(&row(&[
            ("startDate", "2025-06-16"),
            ("endDate", "sometime in July"),
            ("minAge", "8"),
        ]));

        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2025, 6, 16));
        assert_eq!(input.end_date, None);
        assert_eq!(input.min_age, Some(8));
        assert!(input.application_available);
        assert!(!input.is_approved);
    }

    #[test]
    fn required_field_names_follow_entity_table() {
        let internship = InternshipInput::from_row(&RawRow::default());
        assert_eq!(
            internship.required_field_names(),
            vec!["companyName", "title", "description", "city", "state", "types"]
        );
        assert!(!internship.has_required_fields());

        let job = JobInput::from_row(&RawRow::default());
        assert_eq!(
            job.required_field_names(),
            vec!["companyName", "title", "description", "city", "state", "categories"]
        );
    }

    #[test]
    fn empty_list_fails_required_check() {
        let input = TutoringProviderInput::from_row(&row(&[
            ("name", "Acme"),
            ("description", "Great"),
            ("city", "Springfield"),
            ("state", "IL"),
            ("categories", " ; "),
        ]));
        assert!(!input.has_required_fields());
    }

    #[test]
    fn unknown_enum_text_is_reported_but_kept() {
        let job = JobInput::from_row(&row(&[
            ("deliveryMode", "Remote"),
            ("salaryType", "Commission"),
        ]));

        assert_eq!(job.salary_type.as_deref(), Some("Commission"));
        assert_eq!(
            job.unknown_enum_values(),
            vec![UnknownEnumValue {
                column: "salaryType",
                value: "Commission".to_string(),
            }]
        );
    }

    #[test]
    fn columns_cover_every_required_field() {
        let kinds_and_required: [(ListingKind, Vec<&'static str>); 4] = [
            (
                ListingKind::TutoringProvider,
                TutoringProviderInput::from_row(&RawRow::default()).required_field_names(),
            ),
            (
                ListingKind::SummerCamp,
                SummerCampInput::from_row(&RawRow::default()).required_field_names(),
            ),
            (
                ListingKind::Internship,
                InternshipInput::from_row(&RawRow::default()).required_field_names(),
            ),
            (
                ListingKind::Job,
                JobInput::from_row(&RawRow::default()).required_field_names(),
            ),
        ];

        for (kind, required) in kinds_and_required {
            let columns = columns_for(kind);
            for name in required {
                assert!(columns.contains(&name), "{kind} template missing {name}");
            }
        }
    }
}
