//! Generic paginated table driven by a `ResourceState` signal.

use leptos::prelude::*;

use crate::state::resource::{PAGE_SIZES, ResourceState};

/// Table over the records of a resource controller, with loading and empty
/// states and server-side pagination controls.
///
/// Rendering a record is delegated to `row`, which returns a full `<tr>`
/// (including any action buttons). Page changes are reported through the
/// callbacks; the table itself never mutates the state.
#[component]
pub fn DataTable<T>(
    state: RwSignal<ResourceState<T>>,
    headers: &'static [&'static str],
    row: Callback<T, AnyView>,
    on_page: Callback<u32>,
    on_page_size: Callback<u32>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let empty_message = empty_message.unwrap_or("No records found");

    let body = move || {
        let s = state.get();
        if s.loading {
            return view! {
                <div class="data-table__status">
                    <div class="loading-screen__spinner" aria-label="Loading"></div>
                    <p>"Loading data..."</p>
                </div>
            }
            .into_any();
        }
        if s.records.is_empty() {
            return view! {
                <div class="data-table__status">
                    <p>{empty_message}</p>
                </div>
            }
            .into_any();
        }
        view! {
            <table class="data-table__table">
                <thead>
                    <tr>
                        {headers
                            .iter()
                            .map(|h| view! { <th>{*h}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {s.records
                        .into_iter()
                        .map(|record| row.run(record))
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    };

    let pagination = move || {
        let s = state.get();
        let page_count = s.page_count();
        if page_count <= 1 {
            return ().into_any();
        }
        let page_index = s.page_index;
        let at_first = page_index <= 1 || s.loading;
        let at_last = u64::from(page_index) >= page_count || s.loading;
        let current_size = s.page_size;
        view! {
            <div class="data-table__pagination">
                <label class="data-table__page-size">
                    "Rows per page"
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_page_size.run(size);
                        }
                    }>
                        {PAGE_SIZES
                            .iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=*size == current_size>
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="data-table__pager">
                    <span>{format!("Page {page_index} / {page_count}")}</span>
                    <button
                        disabled=at_first
                        on:click=move |_| on_page.run(page_index.saturating_sub(1))
                    >
                        "Prev"
                    </button>
                    <button disabled=at_last on:click=move |_| on_page.run(page_index + 1)>
                        "Next"
                    </button>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="data-table">
            {body}
            {pagination}
        </div>
    }
}
