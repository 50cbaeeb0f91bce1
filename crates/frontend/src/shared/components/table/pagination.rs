use leptos::prelude::*;

use crate::shared::icons::icon;

/// Footer pagination strip: first/prev/next/last plus a rows-per-page select.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] rows_per_page: Signal<usize>,
    on_page_change: Callback<usize>,
    on_rows_per_page_change: Callback<usize>,
    rows_per_page_options: Vec<usize>,
) -> impl IntoView {
    let fallback = rows_per_page_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                title="First page"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination__button"
                title="Previous page"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination__info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("{} / {} ({} records)", page + 1, total, total_count.get())
                }}
            </span>
            <button
                class="pagination__button"
                title="Next page"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination__button"
                title="Last page"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="pagination__page-size"
                prop:value=move || rows_per_page.get().to_string()
                on:change=move |ev| {
                    let value = event_target_value(&ev).parse().unwrap_or(fallback);
                    on_rows_per_page_change.run(value);
                }
            >
                {rows_per_page_options.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || rows_per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
