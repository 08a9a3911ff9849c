use super::domain::{InternshipInput, JobInput, ListingId, SummerCampInput, TutoringProviderInput};

/// Storage abstraction the importer hands validated listings to.
///
/// Each method receives a fully-typed insert record and either returns the
/// new identifier or fails with a message that is surfaced verbatim in the
/// import result.
pub trait ListingStore: Send + Sync {
    fn create_tutoring_provider(
        &self,
        input: TutoringProviderInput,
    ) -> Result<ListingId, StoreError>;
    fn create_summer_camp(&self, input: SummerCampInput) -> Result<ListingId, StoreError>;
    fn create_internship(&self, input: InternshipInput) -> Result<ListingId, StoreError>;
    fn create_job(&self, input: JobInput) -> Result<ListingId, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
