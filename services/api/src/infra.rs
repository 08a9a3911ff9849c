use family_directory::listings::{
    InternshipInput, JobInput, ListingId, ListingKind, ListingStore, StoreError, SummerCampInput,
    TutoringProviderInput,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Listing persisted by the in-memory store, kept as its JSON form.
#[derive(Debug, Clone)]
pub(crate) struct StoredListing {
    pub(crate) kind: ListingKind,
    pub(crate) title: String,
    pub(crate) record: serde_json::Value,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    listings: BTreeMap<ListingId, StoredListing>,
    keys: HashSet<(ListingKind, String)>,
}

/// Process-local listing store; rejects a second listing with the same kind and title.
#[derive(Default, Clone)]
pub(crate) struct InMemoryListingStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryListingStore {
    fn insert<T: serde::Serialize>(
        &self,
        kind: ListingKind,
        title: String,
        input: &T,
    ) -> Result<ListingId, StoreError> {
        let record = serde_json::to_value(input)
            .map_err(|err| StoreError::Rejected(format!("could not encode listing: {err}")))?;

        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        let key = (kind, title.to_ascii_lowercase());
        if guard.keys.contains(&key) {
            return Err(StoreError::Conflict(format!(
                "{} already exists: {}",
                kind.label(),
                title
            )));
        }

        guard.next_id += 1;
        let id = ListingId(guard.next_id);
        guard.keys.insert(key);
        guard.listings.insert(
            id,
            StoredListing {
                kind,
                title,
                record,
            },
        );
        Ok(id)
    }

    pub(crate) fn listings(&self) -> Vec<(ListingId, StoredListing)> {
        match self.inner.lock() {
            Ok(guard) => guard
                .listings
                .iter()
                .map(|(id, listing)| (*id, listing.clone()))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub(crate) fn pending_count(&self, kind: ListingKind) -> usize {
        self.listings()
            .iter()
            .filter(|(_, listing)| listing.kind == kind)
            .filter(|(_, listing)| listing.record["isApproved"] == serde_json::Value::Bool(false))
            .count()
    }
}

impl ListingStore for InMemoryListingStore {
    fn create_tutoring_provider(
        &self,
        input: TutoringProviderInput,
    ) -> Result<ListingId, StoreError> {
        self.insert(ListingKind::TutoringProvider, input.name.clone(), &input)
    }

    fn create_summer_camp(&self, input: SummerCampInput) -> Result<ListingId, StoreError> {
        self.insert(ListingKind::SummerCamp, input.name.clone(), &input)
    }

    fn create_internship(&self, input: InternshipInput) -> Result<ListingId, StoreError> {
        let title = format!("{} - {}", input.company_name, input.title);
        self.insert(ListingKind::Internship, title, &input)
    }

    fn create_job(&self, input: JobInput) -> Result<ListingId, StoreError> {
        let title = format!("{} - {}", input.company_name, input.title);
        self.insert(ListingKind::Job, title, &input)
    }
}
