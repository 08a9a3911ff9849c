//! Listing records produced for the directory and the storage seam they are written through.

pub mod domain;
pub mod store;

pub use domain::{
    InternshipInput, JobInput, ListingId, ListingKind, SummerCampInput, TutoringProviderInput,
    UnknownListingKind, COMPENSATION_TYPES, DELIVERY_MODES, SALARY_TYPES,
};
pub use store::{ListingStore, StoreError};
