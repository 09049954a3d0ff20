use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;

use crate::state::toasts::ToastKind;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Item {
    id: u64,
    name: String,
}

fn item(id: u64) -> Item {
    Item {
        id,
        name: format!("item-{id}"),
    }
}

fn page(count: u64, ids: &[u64]) -> Page<Item> {
    Page {
        count,
        next: None,
        previous: None,
        results: ids.iter().copied().map(item).collect(),
    }
}

fn fmt_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Scripted API: list responses pop from a queue (empty page when
/// exhausted), mutations answer with a single staged response.
#[derive(Clone, Default)]
struct MockApi {
    log: Rc<RefCell<Vec<String>>>,
    list_responses: Rc<RefCell<VecDeque<Result<Page<Item>, ApiError>>>>,
    create_response: Rc<RefCell<Option<Result<Item, ApiError>>>>,
    update_response: Rc<RefCell<Option<Result<Item, ApiError>>>>,
    delete_response: Rc<RefCell<Option<Result<(), ApiError>>>>,
}

impl MockApi {
    fn stage_list(&self, response: Result<Page<Item>, ApiError>) {
        self.list_responses.borrow_mut().push_back(response);
    }

    fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl ResourceApi for MockApi {
    type Record = Item;
    type CreateInput = String;
    type UpdateInput = String;

    const CAN_CREATE: bool = true;
    const CAN_UPDATE: bool = true;
    const CAN_DELETE: bool = true;

    async fn list(&self, params: &[(String, String)]) -> Result<Page<Item>, ApiError> {
        self.log
            .borrow_mut()
            .push(format!("list {}", fmt_params(params)));
        self.list_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(page(0, &[])))
    }

    async fn create(&self, input: &String) -> Result<Item, ApiError> {
        self.log.borrow_mut().push(format!("create {input}"));
        self.create_response.borrow_mut().take().unwrap_or(Ok(item(99)))
    }

    async fn update(&self, id: u64, input: &String) -> Result<Item, ApiError> {
        self.log.borrow_mut().push(format!("update {id} {input}"));
        self.update_response.borrow_mut().take().unwrap_or(Ok(item(id)))
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.log.borrow_mut().push(format!("delete {id}"));
        self.delete_response.borrow_mut().take().unwrap_or(Ok(()))
    }
}

/// List-only capability set: every `CAN_*` const stays false.
#[derive(Clone, Default)]
struct ReadOnlyApi {
    log: Rc<RefCell<Vec<String>>>,
}

impl ResourceApi for ReadOnlyApi {
    type Record = Item;
    type CreateInput = String;
    type UpdateInput = String;

    async fn list(&self, _params: &[(String, String)]) -> Result<Page<Item>, ApiError> {
        self.log.borrow_mut().push("list".to_owned());
        Ok(page(0, &[]))
    }
}

fn controller(api: MockApi) -> (ResourceController<MockApi>, Toaster) {
    let toasts = Toaster::new();
    (ResourceController::new(api, "item", toasts), toasts)
}

fn status(code: u16, message: &str) -> ApiError {
    ApiError::Status {
        status: code,
        message: message.to_owned(),
    }
}

// =============================================================
// Pure state transitions
// =============================================================

#[test]
fn filter_change_resets_page_index() {
    let mut state = ResourceState::<Item>::default();
    state.set_page(4);
    state.merge_filters(vec![("search".to_owned(), Some("math".to_owned()))]);
    assert_eq!(state.page_index, 1);
    assert_eq!(state.filters.get("search").map(String::as_str), Some("math"));
}

#[test]
fn none_filter_value_removes_the_key() {
    let mut state = ResourceState::<Item>::default();
    state.merge_filters(vec![("search".to_owned(), Some("x".to_owned()))]);
    state.merge_filters(vec![("search".to_owned(), None)]);
    assert!(state.filters.is_empty());
}

#[test]
fn page_size_change_resets_page_index() {
    let mut state = ResourceState::<Item>::default();
    state.set_page(3);
    state.set_page_size(50);
    assert_eq!(state.page_size, 50);
    assert_eq!(state.page_index, 1);
}

#[test]
fn page_only_change_keeps_everything_else() {
    let mut state = ResourceState::<Item>::default();
    state.merge_filters(vec![("search".to_owned(), Some("x".to_owned()))]);
    state.set_page(5);
    assert_eq!(state.page_index, 5);
    assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(state.filters.len(), 1);
}

#[test]
fn page_index_is_clamped_to_one() {
    let mut state = ResourceState::<Item>::default();
    state.set_page(0);
    assert_eq!(state.page_index, 1);
}

#[test]
fn unsupported_page_size_is_ignored() {
    let mut state = ResourceState::<Item>::default();
    state.set_page(2);
    state.set_page_size(37);
    assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(state.page_index, 2);
}

#[test]
fn page_count_rounds_up() {
    let mut state = ResourceState::<Item>::default();
    state.total_count = 45;
    assert_eq!(state.page_count(), 3);
    state.total_count = 40;
    assert_eq!(state.page_count(), 2);
    state.total_count = 0;
    assert_eq!(state.page_count(), 1);
}

#[test]
fn list_params_carry_pagination_then_filters() {
    let mut state = ResourceState::<Item>::default();
    state.set_page(2);
    state.merge_filters(vec![
        ("search".to_owned(), Some("cs".to_owned())),
        ("is_active".to_owned(), Some("true".to_owned())),
    ]);
    state.set_page(2);
    let params = fmt_params(&state.list_params());
    assert_eq!(params, "page=2&page_size=20&is_active=true&search=cs");
}

// =============================================================
// Fetch protocol
// =============================================================

#[test]
fn refetch_applies_page_and_clears_error() {
    let api = MockApi::default();
    api.stage_list(Ok(page(45, &[1, 2, 3])));
    let (ctrl, _toasts) = controller(api);
    ctrl.state().update(|s| s.error = Some("stale".to_owned()));

    block_on(ctrl.refetch());

    let state = ctrl.state().get_untracked();
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.total_count, 45);
    assert_eq!(state.page_count(), 3);
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn refetch_failure_keeps_records_and_toasts() {
    let api = MockApi::default();
    api.stage_list(Ok(page(2, &[1, 2])));
    api.stage_list(Err(status(503, "backend down")));
    let (ctrl, toasts) = controller(api);

    block_on(ctrl.refetch());
    block_on(ctrl.refetch());

    let state = ctrl.state().get_untracked();
    assert_eq!(state.records.len(), 2, "stale records stay visible");
    assert_eq!(state.error.as_deref(), Some("backend down"));
    assert!(!state.loading);

    let queued = toasts.signal().get_untracked().toasts;
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].kind, ToastKind::Error);
    assert!(queued[0].message.contains("backend down"));
}

#[test]
fn set_filters_fetches_page_one() {
    let api = MockApi::default();
    let (ctrl, _toasts) = controller(api.clone());

    block_on(ctrl.set_pagination(Some(3), None));
    block_on(ctrl.set_filters(vec![("search".to_owned(), Some("math".to_owned()))]));

    let calls = api.calls();
    assert_eq!(calls[0], "list page=3&page_size=20");
    assert_eq!(calls[1], "list page=1&page_size=20&search=math");
}

#[test]
fn set_pagination_applies_size_before_index() {
    let api = MockApi::default();
    let (ctrl, _toasts) = controller(api.clone());

    block_on(ctrl.set_pagination(Some(2), Some(50)));

    assert_eq!(api.calls(), vec!["list page=2&page_size=50"]);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn create_refetches_and_clears_submitting() {
    let api = MockApi::default();
    let (ctrl, toasts) = controller(api.clone());

    let result = block_on(ctrl.create_item(&"alpha".to_owned()));

    assert!(matches!(result, Ok(Some(_))));
    assert!(!ctrl.state().get_untracked().submitting);
    let calls = api.calls();
    assert_eq!(calls[0], "create alpha");
    assert!(calls[1].starts_with("list "), "create refetches the page");
    let queued = toasts.signal().get_untracked().toasts;
    assert_eq!(queued[0].kind, ToastKind::Success);
}

#[test]
fn create_failure_returns_error_and_clears_submitting() {
    let api = MockApi::default();
    *api.create_response.borrow_mut() = Some(Err(status(400, "code exists")));
    let (ctrl, toasts) = controller(api.clone());

    let result = block_on(ctrl.create_item(&"dup".to_owned()));

    assert_eq!(result, Err(status(400, "code exists")));
    assert!(!ctrl.state().get_untracked().submitting);
    assert_eq!(api.calls(), vec!["create dup"], "no refetch on failure");
    let queued = toasts.signal().get_untracked().toasts;
    assert_eq!(queued[0].kind, ToastKind::Error);
    assert!(queued[0].message.contains("code exists"));
}

#[test]
fn update_failure_returns_error_and_clears_submitting() {
    let api = MockApi::default();
    *api.update_response.borrow_mut() = Some(Err(status(409, "conflict")));
    let (ctrl, _toasts) = controller(api.clone());

    let result = block_on(ctrl.update_item(7, &"beta".to_owned()));

    assert_eq!(result, Err(status(409, "conflict")));
    assert!(!ctrl.state().get_untracked().submitting);
    assert_eq!(api.calls(), vec!["update 7 beta"]);
}

#[test]
fn mutations_are_noops_without_the_capability() {
    let api = ReadOnlyApi::default();
    let toasts = Toaster::new();
    let ctrl = ResourceController::new(api.clone(), "item", toasts);

    let created = block_on(ctrl.create_item(&"x".to_owned()));
    let updated = block_on(ctrl.update_item(1, &"y".to_owned()));
    block_on(ctrl.delete_item(1));

    assert!(matches!(created, Ok(None)));
    assert!(matches!(updated, Ok(None)));
    assert!(api.log.borrow().is_empty(), "no API calls were made");
    assert!(!ctrl.state().get_untracked().submitting);
    assert!(toasts.signal().get_untracked().toasts.is_empty());
}

// =============================================================
// Delete edge cases
// =============================================================

#[test]
fn deleting_sole_record_beyond_page_one_steps_back() {
    let api = MockApi::default();
    // Page 3 of 41 records at page size 20 holds exactly one record.
    api.stage_list(Ok(page(41, &[41])));
    api.stage_list(Ok(page(40, &[21, 22])));
    let (ctrl, _toasts) = controller(api.clone());

    block_on(ctrl.set_pagination(Some(3), None));
    block_on(ctrl.delete_item(41));

    assert_eq!(ctrl.state().get_untracked().page_index, 2);
    let calls = api.calls();
    assert_eq!(calls[0], "list page=3&page_size=20");
    assert_eq!(calls[1], "delete 41");
    assert_eq!(calls[2], "list page=2&page_size=20");
}

#[test]
fn deleting_on_page_one_refetches_in_place() {
    let api = MockApi::default();
    api.stage_list(Ok(page(1, &[7])));
    let (ctrl, _toasts) = controller(api.clone());

    block_on(ctrl.refetch());
    block_on(ctrl.delete_item(7));

    assert_eq!(ctrl.state().get_untracked().page_index, 1);
    assert_eq!(api.calls()[2], "list page=1&page_size=20");
}

#[test]
fn delete_failure_toasts_and_skips_refetch() {
    let api = MockApi::default();
    api.stage_list(Ok(page(3, &[1, 2, 3])));
    *api.delete_response.borrow_mut() = Some(Err(status(403, "forbidden")));
    let (ctrl, toasts) = controller(api.clone());

    block_on(ctrl.refetch());
    block_on(ctrl.delete_item(2));

    let calls = api.calls();
    assert_eq!(calls.len(), 2, "no refetch after a failed delete");
    assert_eq!(calls[1], "delete 2");
    assert_eq!(ctrl.state().get_untracked().records.len(), 3);
    let queued = toasts.signal().get_untracked().toasts;
    assert_eq!(queued[0].kind, ToastKind::Error);
}
