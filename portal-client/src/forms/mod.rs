//! Form-definition store
//!
//! One [`FormRepository`] per [`FormCategory`], all backed by the same
//! key-value storage.

mod repository;

use std::sync::Arc;

use portal_common::FormCategory;

pub use repository::{FormRepository, RepositoryError};

use crate::constants::{REPORT_FORMS_KEY, REQUEST_FORMS_KEY};
use crate::storage::Storage;

/// Storage key for a category's collection
pub fn storage_key(category: FormCategory) -> &'static str {
    match category {
        FormCategory::Report => REPORT_FORMS_KEY,
        FormCategory::Request => REQUEST_FORMS_KEY,
    }
}

/// The report and request repositories
pub struct FormStore {
    reports: FormRepository,
    requests: FormRepository,
}

impl FormStore {
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self {
            reports: FormRepository::open(storage.clone(), storage_key(FormCategory::Report)),
            requests: FormRepository::open(storage, storage_key(FormCategory::Request)),
        }
    }

    pub fn get(&self, category: FormCategory) -> &FormRepository {
        match category {
            FormCategory::Report => &self.reports,
            FormCategory::Request => &self.requests,
        }
    }

    pub fn get_mut(&mut self, category: FormCategory) -> &mut FormRepository {
        match category {
            FormCategory::Report => &mut self.reports,
            FormCategory::Request => &mut self.requests,
        }
    }
}
