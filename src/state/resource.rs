//! Generic pagination/filtering/mutation state machine for REST resources.
//!
//! Every entity page (faculties, majors, classes) is the same screen with a
//! different record type: a paginated, filterable table plus create/update/
//! delete actions. [`ResourceState`] holds the plain data and its pure
//! transitions; [`ResourceController`] binds it to a [`ResourceApi`]
//! capability set, a toast sink, and a `RwSignal` the view renders from.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Page;
use crate::state::toasts::Toaster;

/// Page sizes offered by the table's page-size select.
pub const PAGE_SIZES: [u32; 5] = [10, 20, 30, 50, 100];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// CRUD capability set for one resource.
///
/// `list` is required; the mutations are advertised through the `CAN_*`
/// consts and default to rejecting, so a read-only resource implements
/// nothing extra.
// Futures run on the single UI thread; Send bounds are not needed.
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    type Record: Clone + Send + Sync + 'static;
    type CreateInput;
    type UpdateInput;

    const CAN_CREATE: bool = false;
    const CAN_UPDATE: bool = false;
    const CAN_DELETE: bool = false;

    async fn list(&self, params: &[(String, String)]) -> Result<Page<Self::Record>, ApiError>;

    async fn create(&self, _input: &Self::CreateInput) -> Result<Self::Record, ApiError> {
        Err(ApiError::Unsupported)
    }

    async fn update(&self, _id: u64, _input: &Self::UpdateInput) -> Result<Self::Record, ApiError> {
        Err(ApiError::Unsupported)
    }

    async fn delete(&self, _id: u64) -> Result<(), ApiError> {
        Err(ApiError::Unsupported)
    }
}

/// List/pagination/mutation state for one resource.
///
/// Invariants: `records.len() <= page_size` (server page order is kept
/// as-is), `page_index >= 1`, and any filter or page-size change resets
/// `page_index` to 1.
#[derive(Clone, Debug)]
pub struct ResourceState<T> {
    pub records: Vec<T>,
    pub total_count: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, String>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
            loading: false,
            submitting: false,
            error: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// Number of pages implied by `total_count`, never less than 1.
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size)).max(1)
    }

    /// Merge filter entries; a `None` value removes the key. Always resets
    /// to the first page.
    pub fn merge_filters<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        for (key, value) in entries {
            match value {
                Some(value) => {
                    self.filters.insert(key, value);
                }
                None => {
                    self.filters.remove(&key);
                }
            }
        }
        self.page_index = 1;
    }

    /// Jump to a page; indices are clamped to >= 1.
    pub fn set_page(&mut self, index: u32) {
        self.page_index = index.max(1);
    }

    /// Change the page size and reset to the first page. Sizes outside
    /// [`PAGE_SIZES`] are ignored.
    pub fn set_page_size(&mut self, size: u32) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page_index = 1;
        }
    }

    /// Query parameters for the list endpoint: pagination first, then the
    /// filter map in key order.
    pub fn list_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_owned(), self.page_index.to_string()),
            ("page_size".to_owned(), self.page_size.to_string()),
        ];
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }

    /// Replace records from a fetched page and clear any stale error.
    pub fn apply_page(&mut self, page: Page<T>) {
        self.records = page.results;
        self.total_count = page.count;
        self.error = None;
    }

    /// Record a fetch failure; previous records stay visible.
    pub fn apply_fetch_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// True when a delete would empty a page we could step back from.
    pub fn sole_record_beyond_first_page(&self) -> bool {
        self.records.len() == 1 && self.page_index > 1
    }
}

/// Binds a [`ResourceApi`] to reactive state, toasts, and refetching.
///
/// Copyable when the API object is (the real APIs are unit structs), so
/// event handlers can capture it freely.
pub struct ResourceController<A: ResourceApi + 'static> {
    api: A,
    label: &'static str,
    state: RwSignal<ResourceState<A::Record>>,
    toasts: Toaster,
}

// Manual impls: the built-in derives would also require `A::Record: Clone`
// (and `Copy`), but the record only lives behind the `RwSignal` handle.
impl<A: ResourceApi + Clone + 'static> Clone for ResourceController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            label: self.label,
            state: self.state,
            toasts: self.toasts,
        }
    }
}

impl<A: ResourceApi + Copy + 'static> Copy for ResourceController<A> {}

impl<A: ResourceApi + Clone + 'static> ResourceController<A> {
    /// `label` names the resource in toast messages ("faculty", "class").
    pub fn new(api: A, label: &'static str, toasts: Toaster) -> Self {
        Self {
            api,
            label,
            state: RwSignal::new(ResourceState::default()),
            toasts,
        }
    }

    /// The reactive state the table renders from.
    pub const fn state(&self) -> RwSignal<ResourceState<A::Record>> {
        self.state
    }

    /// Re-run the list fetch with current pagination and filters.
    ///
    /// Superseded fetches are not cancelled; if callers overlap them the
    /// last one to resolve wins. Rapid filter changes can therefore apply
    /// an older response briefly, which the next resolution corrects.
    pub async fn refetch(&self) {
        let params = self.state.with_untracked(ResourceState::list_params);
        self.state.update(|s| s.loading = true);
        match self.api.list(&params).await {
            Ok(page) => self.state.update(|s| s.apply_page(page)),
            Err(err) => {
                let message = err.to_string();
                self.toasts
                    .error(format!("Failed to load {} list: {message}", self.label));
                self.state.update(|s| s.apply_fetch_error(message));
            }
        }
        self.state.update(|s| s.loading = false);
    }

    /// Merge filters, reset to page 1, refetch.
    pub async fn set_filters(&self, entries: Vec<(String, Option<String>)>) {
        self.state.update(|s| s.merge_filters(entries));
        self.refetch().await;
    }

    /// Update pagination and refetch. A page-size change resets the page
    /// index to 1 before an explicit index (if any) is applied.
    pub async fn set_pagination(&self, page_index: Option<u32>, page_size: Option<u32>) {
        self.state.update(|s| {
            if let Some(size) = page_size {
                s.set_page_size(size);
            }
            if let Some(index) = page_index {
                s.set_page(index);
            }
        });
        self.refetch().await;
    }

    /// Create a record. `Ok(None)` when the capability is absent. Errors
    /// are toast-reported and returned so forms can surface them.
    pub async fn create_item(&self, input: &A::CreateInput) -> Result<Option<A::Record>, ApiError> {
        if !A::CAN_CREATE {
            return Ok(None);
        }
        self.state.update(|s| s.submitting = true);
        let result = self.api.create(input).await;
        match &result {
            Ok(_) => {
                self.toasts.success(format!("Created {}", self.label));
                self.refetch().await;
            }
            Err(err) => {
                self.toasts
                    .error(format!("Failed to create {}: {err}", self.label));
            }
        }
        self.state.update(|s| s.submitting = false);
        result.map(Some)
    }

    /// Update one record; same contract as [`Self::create_item`].
    pub async fn update_item(
        &self,
        id: u64,
        input: &A::UpdateInput,
    ) -> Result<Option<A::Record>, ApiError> {
        if !A::CAN_UPDATE {
            return Ok(None);
        }
        self.state.update(|s| s.submitting = true);
        let result = self.api.update(id, input).await;
        match &result {
            Ok(_) => {
                self.toasts.success(format!("Updated {}", self.label));
                self.refetch().await;
            }
            Err(err) => {
                self.toasts
                    .error(format!("Failed to update {}: {err}", self.label));
            }
        }
        self.state.update(|s| s.submitting = false);
        result.map(Some)
    }

    /// Delete a record. Failures are toast-reported and swallowed; there is
    /// nothing for the caller to recover inline.
    ///
    /// Deleting the sole record on a page beyond the first steps back one
    /// page before refetching, so the table never lands on an empty page.
    pub async fn delete_item(&self, id: u64) {
        if !A::CAN_DELETE {
            return;
        }
        match self.api.delete(id).await {
            Ok(()) => {
                self.toasts.success(format!("Deleted {}", self.label));
                if self
                    .state
                    .with_untracked(ResourceState::sole_record_beyond_first_page)
                {
                    self.state.update(|s| s.page_index -= 1);
                }
                self.refetch().await;
            }
            Err(err) => {
                self.toasts
                    .error(format!("Failed to delete {}: {err}", self.label));
            }
        }
    }
}