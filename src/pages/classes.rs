//! Class management page.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::delete_confirm::DeleteConfirmDialog;
use crate::components::protected_route::RoleGate;
use crate::net::academics::{self, ClassApi};
use crate::net::types::{Class, ClassInput, STAFF_ROLES};
use crate::state::resource::ResourceController;
use crate::state::toasts::Toaster;
use crate::util::task;

const HEADERS: &[&str] = &["Code", "Name", "Major", "Year", "Max", "Status", ""];

/// Paginated class table with search, a major filter, and staff-gated
/// create/edit/delete dialogs.
#[component]
pub fn ClassesPage() -> impl IntoView {
    let toasts = expect_context::<Toaster>();
    let ctrl = ResourceController::new(ClassApi, "class", toasts);
    let state = ctrl.state();

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Class>);
    let pending_delete = RwSignal::new(None::<Class>);
    let search = RwSignal::new(String::new());

    // Major options for the filter select.
    let majors = LocalResource::new(academics::major_options);

    Effect::new(move || {
        task::spawn(async move { ctrl.refetch().await });
    });

    let on_page = Callback::new(move |index: u32| {
        task::spawn(async move { ctrl.set_pagination(Some(index), None).await });
    });
    let on_page_size = Callback::new(move |size: u32| {
        task::spawn(async move { ctrl.set_pagination(None, Some(size)).await });
    });

    let row = Callback::new(move |class: Class| {
        let status = if class.is_active { "Active" } else { "Inactive" };
        let record = class.clone();
        view! {
            <tr>
                <td>{class.code.clone()}</td>
                <td>{class.name.clone()}</td>
                <td>{class.major.name.clone()}</td>
                <td>{class.academic_year}</td>
                <td>{class.max_students}</td>
                <td>{status}</td>
                <td class="data-table__actions">
                    <RoleGate allowed_roles=STAFF_ROLES>
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
                    <h1>"Classes"</h1>
                    <p class="entity-page__count">
                        {move || state.with(|s| format!("{} classes in total", s.total_count))}
                    </p>
                </div>
                <RoleGate allowed_roles=STAFF_ROLES>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            editing.set(None);
                            show_form.set(true);
                        }
                    >
                        "+ New Class"
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
                <select
                    class="entity-page__filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let filter = (!value.is_empty()).then_some(value);
                        task::spawn(async move {
                            ctrl.set_filters(vec![("major".to_owned(), filter)]).await;
                        });
                    }
                >
                    <option value="">"All majors"</option>
                    {move || {
                        majors
                            .get()
                            .map(|options| {
                                options
                                    .into_iter()
                                    .map(|m| {
                                        view! {
                                            <option value=m.id.to_string()>
                                                {format!("{} ({})", m.name, m.code)}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
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
                empty_message="No classes found"
            />

            <Show when=move || show_form.get()>
                <ClassFormDialog ctrl=ctrl editing=editing show=show_form/>
            </Show>

            {move || {
                pending_delete
                    .get()
                    .map(|class| {
                        let description = format!(
                            "Delete class \"{}\"? This action cannot be undone.",
                            class.name,
                        );
                        let id = class.id;
                        view! {
                            <DeleteConfirmDialog
                                title="Delete class"
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

/// Create/edit dialog with a major select fed from the options endpoint.
#[component]
fn ClassFormDialog(
    ctrl: ResourceController<ClassApi>,
    editing: RwSignal<Option<Class>>,
    show: RwSignal<bool>,
) -> impl IntoView {
    let initial = editing.get_untracked();
    let id = initial.as_ref().map(|c| c.id);
    let code = RwSignal::new(initial.as_ref().map(|c| c.code.clone()).unwrap_or_default());
    let name = RwSignal::new(initial.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let major_id = RwSignal::new(initial.as_ref().map(|c| c.major.id));
    let academic_year = RwSignal::new(
        initial
            .as_ref()
            .map_or_else(|| String::from("2026"), |c| c.academic_year.to_string()),
    );
    let max_students = RwSignal::new(
        initial
            .as_ref()
            .map_or_else(|| String::from("30"), |c| c.max_students.to_string()),
    );
    let is_active = RwSignal::new(initial.as_ref().map_or(true, |c| c.is_active));

    let heading = if id.is_some() { "Edit Class" } else { "New Class" };

    let majors = LocalResource::new(academics::major_options);

    let cancel = Callback::new(move |(): ()| {
        editing.set(None);
        show.set(false);
    });

    let submit = Callback::new(move |(): ()| {
        let code_value = code.get_untracked().trim().to_owned();
        let name_value = name.get_untracked().trim().to_owned();
        let Some(major) = major_id.get_untracked() else {
            return;
        };
        let Ok(year) = academic_year.get_untracked().trim().parse::<i32>() else {
            return;
        };
        let Ok(capacity) = max_students.get_untracked().trim().parse::<u32>() else {
            return;
        };
        if code_value.is_empty() || name_value.is_empty() {
            return;
        }
        let description_value = description.get_untracked().trim().to_owned();
        let input = ClassInput {
            code: code_value,
            name: name_value,
            description: (!description_value.is_empty()).then_some(description_value),
            major_id: major,
            academic_year: year,
            max_students: capacity,
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
                    "Major"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            major_id.set(event_target_value(&ev).parse::<u64>().ok());
                        }
                    >
                        <option value="" selected=major_id.get_untracked().is_none()>
                            "Select a major"
                        </option>
                        {move || {
                            majors
                                .get()
                                .map(|options| {
                                    options
                                        .into_iter()
                                        .map(|m| {
                                            let selected = major_id.get_untracked() == Some(m.id);
                                            view! {
                                                <option value=m.id.to_string() selected=selected>
                                                    {format!("{} ({})", m.name, m.code)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Academic year"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || academic_year.get()
                        on:input=move |ev| academic_year.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Max students"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || max_students.get()
                        on:input=move |ev| max_students.set(event_target_value(&ev))
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
