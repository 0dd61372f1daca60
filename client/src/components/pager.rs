//! Previous / numbered / next page controls.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

pub(crate) fn previous_page(current: usize) -> Option<usize> {
    current.checked_sub(1)
}

pub(crate) fn next_page(current: usize, page_count: usize) -> Option<usize> {
    let next = current + 1;
    (next < page_count).then_some(next)
}

/// Renders nothing when there are no pages.
#[component]
pub fn Pager(
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { page_count.get() > 0 }>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="pager__item"
                    disabled=move || previous_page(current.get()).is_none()
                    on:click=move |_| {
                        if let Some(page) = previous_page(current.get()) {
                            on_select.run(page);
                        }
                    }
                >
                    "‹"
                </button>
                {move || {
                    (0..page_count.get())
                        .map(|page| {
                            let class = if page == current.get() { "pager__item pager__item--active" } else { "pager__item" };
                            view! {
                                <button class=class on:click=move |_| on_select.run(page)>
                                    {page + 1}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pager__item"
                    disabled=move || next_page(current.get(), page_count.get()).is_none()
                    on:click=move |_| {
                        if let Some(page) = next_page(current.get(), page_count.get()) {
                            on_select.run(page);
                        }
                    }
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
