//! Faculty management page.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::delete_confirm::DeleteConfirmDialog;
use crate::components::protected_route::RoleGate;
use crate::net::academics::FacultyApi;
use crate::net::types::{ADMIN_ONLY, Faculty, FacultyInput};
use crate::state::resource::ResourceController;
use crate::state::toasts::Toaster;
use crate::util::task;

const HEADERS: &[&str] = &["Code", "Name", "Majors", "Status", ""];

/// Paginated faculty table with search, create/edit dialog, and delete
/// confirmation. Mutation controls are admin-gated.
#[component]
pub fn FacultiesPage() -> impl IntoView {
    let toasts = expect_context::<Toaster>();
    let ctrl = ResourceController::new(FacultyApi, "faculty", toasts);
    let state = ctrl.state();

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Faculty>);
    let pending_delete = RwSignal::new(None::<Faculty>);
    let search = RwSignal::new(String::new());

    // Initial fetch on mount.
    Effect::new(move || {
        task::spawn(async move { ctrl.refetch().await });
    });

    let on_page = Callback::new(move |index: u32| {
        task::spawn(async move { ctrl.set_pagination(Some(index), None).await });
    });
    let on_page_size = Callback::new(move |size: u32| {
        task::spawn(async move { ctrl.set_pagination(None, Some(size)).await });
    });

    let row = Callback::new(move |faculty: Faculty| {
        let status = if faculty.is_active { "Active" } else { "Inactive" };
        let record = faculty.clone();
        view! {
            <tr>
                <td>{faculty.code.clone()}</td>
                <td>{faculty.name.clone()}</td>
                <td>{faculty.majors_count}</td>
                <td>{status}</td>
                <td class="data-table__actions">
                    <RoleGate allowed_roles=ADMIN_ONLY>
                        {
                            let edit = record.clone();
                            let remove = record.clone();
                            view! {
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        editing.set(Some(edit.clone()));
                                        show_form.set(true);
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| pending_delete.set(Some(remove.clone()))
                                >
                                    "Delete"
                                </button>
                            }
                        }
                    </RoleGate>
                </td>
            </tr>
        }
        .into_any()
    });

    view! {
        <div class="entity-page">
            <header class="entity-page__header">
                <div>
                    <h1>"Faculties"</h1>
                    <p class="entity-page__count">
                        {move || state.with(|s| format!("{} faculties in total", s.total_count))}
                    </p>
                </div>
                <RoleGate allowed_roles=ADMIN_ONLY>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            editing.set(None);
                            show_form.set(true);
                        }
                    >
                        "+ New Faculty"
                    </button>
                </RoleGate>
            </header>

            <div class="entity-page__filters">
                <input
                    type="search"
                    placeholder="Search by code or name"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search.set(value.clone());
                        let trimmed = value.trim().to_owned();
                        let filter = (!trimmed.is_empty()).then_some(trimmed);
                        task::spawn(async move {
                            ctrl.set_filters(vec![("search".to_owned(), filter)]).await;
                        });
                    }
                />
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <div class="entity-page__error">{message}</div> })
            }}

            <DataTable
                state=state
                headers=HEADERS
                row=row
                on_page=on_page
                on_page_size=on_page_size
                empty_message="No faculties found"
            />

            <Show when=move || show_form.get()>
                <FacultyFormDialog ctrl=ctrl editing=editing show=show_form/>
            </Show>

            {move || {
                pending_delete
                    .get()
                    .map(|faculty| {
                        let description = format!(
                            "Delete faculty \"{}\"? This action cannot be undone.",
                            faculty.name,
                        );
                        let id = faculty.id;
                        view! {
                            <DeleteConfirmDialog
                                title="Delete faculty"
                                description=description
                                on_confirm=Callback::new(move |_| {
                                    pending_delete.set(None);
                                    task::spawn(async move { ctrl.delete_item(id).await });
                                })
                                on_cancel=Callback::new(move |_| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Create/edit dialog. Mounted fresh on every open, so the field signals
/// seed from the record under edit at construction time.
#[component]
fn FacultyFormDialog(
    ctrl: ResourceController<FacultyApi>,
    editing: RwSignal<Option<Faculty>>,
    show: RwSignal<bool>,
) -> impl IntoView {
    let initial = editing.get_untracked();
    let id = initial.as_ref().map(|f| f.id);
    let code = RwSignal::new(initial.as_ref().map(|f| f.code.clone()).unwrap_or_default());
    let name = RwSignal::new(initial.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .and_then(|f| f.description.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(initial.as_ref().map_or(true, |f| f.is_active));

    let heading = if id.is_some() { "Edit Faculty" } else { "New Faculty" };

    let cancel = Callback::new(move |(): ()| {
        editing.set(None);
        show.set(false);
    });

    let submit = Callback::new(move |(): ()| {
        let code_value = code.get_untracked().trim().to_owned();
        let name_value = name.get_untracked().trim().to_owned();
        if code_value.is_empty() || name_value.is_empty() {
            return;
        }
        let description_value = description.get_untracked().trim().to_owned();
        let input = FacultyInput {
            code: code_value,
            name: name_value,
            description: (!description_value.is_empty()).then_some(description_value),
            is_active: is_active.get_untracked(),
        };
        task::spawn(async move {
            let result = match id {
                Some(id) => ctrl.update_item(id, &input).await,
                None => ctrl.create_item(&input).await,
            };
            if result.is_ok() {
                editing.set(None);
                show.set(false);
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Code"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || ctrl.state().with(|s| s.submitting)
                        on:click=move |_| submit.run(())
                    >
                        {if id.is_some() { "Save" } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
