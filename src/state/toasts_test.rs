use super::*;

// =============================================================
// ToastState queue
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved".to_owned());
    let b = state.push(ToastKind::Error, "failed".to_owned());
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let b = state.push(ToastKind::Success, "two".to_owned());
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    // Dismissing again is a no-op.
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

// =============================================================
// Toaster handle
// =============================================================

#[test]
fn toaster_records_kind_and_message() {
    let toaster = Toaster::new();
    toaster.success("created");
    toaster.error("boom");

    let toasts = toaster.signal().get_untracked().toasts;
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "created");
    assert_eq!(toasts[1].kind, ToastKind::Error);
}

#[test]
fn toaster_dismiss_removes_toast() {
    let toaster = Toaster::new();
    toaster.success("bye");
    let id = toaster.signal().get_untracked().toasts[0].id;
    toaster.dismiss(id);
    assert!(toaster.signal().get_untracked().toasts.is_empty());
}
