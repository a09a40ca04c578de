use std::str::FromStr;

use api::assets::quantity::with_commas;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::asset_query::page_items;
use crate::asset_query::PageItem;
use crate::asset_query::PageSize;
use crate::asset_query::Pagination;

/// Total count, page selector and page size changer for a table.
///
/// `pagination` is owned by the table so its page size outlives changes to
/// the rows being shown.
#[component]
pub fn PaginationControls(
    total: usize,
    mut pagination: Signal<Pagination>,
    item_label: &'static str,
) -> Element {
    let current = pagination().clamped(total);
    let page_count = current.page_count(total);

    rsx! {
        nav {
            class: "pagination",
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 0.5rem; flex-wrap: wrap; margin: 0.5rem 0;",
            span {
                style: "color: var(--pico-muted-color); margin-right: auto;",
                "{with_commas(total)} {item_label}"
            }
            button {
                class: "secondary outline page-button",
                disabled: current.page <= 1,
                onclick: move |_| pagination.set(current.previous()),
                "‹"
            }
            for item in page_items(current.page, page_count) {
                match item {
                    PageItem::Page(page) => rsx! {
                        button {
                            class: if page == current.page { "page-button" } else { "secondary outline page-button" },
                            "aria-current": if page == current.page { "page" } else { "false" },
                            onclick: move |_| pagination.set(current.with_page(page)),
                            "{page}"
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span { style: "color: var(--pico-muted-color);", "…" }
                    },
                }
            }
            button {
                class: "secondary outline page-button",
                disabled: current.page >= page_count,
                onclick: move |_| pagination.set(current.next(total)),
                "›"
            }
            select {
                style: "width: auto; margin-bottom: 0; padding: 4px 8px; font-size: 0.9rem;",
                "aria-label": "Rows per page",
                onchange: move |evt| {
                    match PageSize::from_str(&evt.value()) {
                        Ok(size) => {
                            dioxus_logger::tracing::debug!("page size changed to {}", size);
                            let resized = pagination.peek().with_page_size(size);
                            pagination.set(resized);
                        }
                        Err(e) => dioxus_logger::tracing::debug!("ignoring page size {:?}: {}", evt.value(), e),
                    }
                },
                for size in PageSize::iter() {
                    option {
                        value: "{size}",
                        selected: size == current.page_size,
                        "{size} / page"
                    }
                }
            }
        }
    }
}
