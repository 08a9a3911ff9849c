#![allow(dead_code)]

use std::sync::Mutex;

use family_directory::listings::{
    InternshipInput, JobInput, ListingId, ListingStore, StoreError, SummerCampInput,
    TutoringProviderInput,
};

/// Store double that records every insert and can reject selected names.
#[derive(Default)]
pub struct MemoryStore {
    pub providers: Mutex<Vec<TutoringProviderInput>>,
    pub camps: Mutex<Vec<SummerCampInput>>,
    pub internships: Mutex<Vec<InternshipInput>>,
    pub jobs: Mutex<Vec<JobInput>>,
    pub reject_names: Vec<String>,
}

impl MemoryStore {
    pub fn rejecting(names: &[&str]) -> Self {
        Self {
            reject_names: names.iter().map(|name| name.to_string()).collect(),
            ..Self::default()
        }
    }

    fn check(&self, name: &str) -> Result<(), StoreError> {
        if self.reject_names.iter().any(|rejected| rejected == name) {
            return Err(StoreError::Conflict(format!("duplicate listing: {name}")));
        }
        Ok(())
    }

    fn push<T>(slot: &Mutex<Vec<T>>, value: T) -> ListingId {
        let mut guard = slot.lock().expect("store mutex poisoned");
        guard.push(value);
        ListingId(guard.len() as u64)
    }

    pub fn providers(&self) -> Vec<TutoringProviderInput> {
        self.providers.lock().expect("store mutex poisoned").clone()
    }

    pub fn camps(&self) -> Vec<SummerCampInput> {
        self.camps.lock().expect("store mutex poisoned").clone()
    }

    pub fn internships(&self) -> Vec<InternshipInput> {
        self.internships.lock().expect("store mutex poisoned").clone()
    }

    pub fn jobs(&self) -> Vec<JobInput> {
        self.jobs.lock().expect("store mutex poisoned").clone()
    }
}

impl ListingStore for MemoryStore {
    fn create_tutoring_provider(
        &self,
        input: TutoringProviderInput,
    ) -> Result<ListingId, StoreError> {
        self.check(&input.name)?;
        Ok(Self::push(&self.providers, input))
    }

    fn create_summer_camp(&self, input: SummerCampInput) -> Result<ListingId, StoreError> {
        self.check(&input.name)?;
        Ok(Self::push(&self.camps, input))
    }

    fn create_internship(&self, input: InternshipInput) -> Result<ListingId, StoreError> {
        self.check(&input.title)?;
        Ok(Self::push(&self.internships, input))
    }

    fn create_job(&self, input: JobInput) -> Result<ListingId, StoreError> {
        self.check(&input.title)?;
        Ok(Self::push(&self.jobs, input))
    }
}
