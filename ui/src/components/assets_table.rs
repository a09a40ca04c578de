//=============================================================================
// File: src/components/assets_table.rs
//=============================================================================
use api::assets::asset::Asset;
use api::assets::display::truncate_id;
use api::assets::display::truncate_name;
use dioxus::prelude::*;

use crate::asset_query::row_key;
use crate::asset_query::sort_assets;
use crate::asset_query::PageSize;
use crate::asset_query::Pagination;
use crate::asset_query::SortDirection;
use crate::asset_query::SortState;
use crate::asset_query::SortableColumn;
use crate::components::asset_image::AssetImage;
use crate::components::informers::AssetQuantity;
use crate::components::informers::CopyText;
use crate::components::pagination::PaginationControls;

/// Row density of the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TableSize {
    Small,
    #[default]
    Middle,
    Large,
}

#[component]
fn SortableHeader(
    title: &'static str,
    column: SortableColumn,
    mut sort: Signal<Option<SortState>>,
    style: Option<&'static str>,
) -> Element {
    let arrow_char = match sort() {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "\u{00A0}",
    };

    rsx! {
        th {
            style: format!("{}{}", "cursor: pointer; white-space: nowrap; ", style.unwrap_or("")),
            onclick: move |_| {
                let next = SortState::toggle(*sort.peek(), column);
                sort.set(next);
            },
            "{title}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow_char}"
            }
        }
    }
}

#[component]
fn AssetRow(asset: Asset) -> Element {
    let name = asset.display_name();

    rsx! {
        tr {
            td {
                style: "padding-right: 0;",
                AssetImage { asset_id: asset.image_id() }
            }
            td {
                strong { title: "{name}", "{truncate_name(&name)}" }
            }
            td {
                AssetQuantity {
                    quantity: asset.quantity.clone(),
                    decimals: asset.decimals(),
                }
            }
            td {
                class: "id-cell",
                style: "text-align: right;",
                CopyText {
                    value: truncate_id(&asset.policy_id),
                    copy: asset.policy_id.clone(),
                }
            }
            td {
                class: "id-cell",
                style: "text-align: right;",
                CopyText {
                    value: truncate_id(&asset.fingerprint),
                    copy: asset.fingerprint.clone(),
                }
            }
        }
    }
}

/// Sortable, paginated table over an already filtered asset list.
///
/// Sort and paging state live here, so they survive changes to `data`.
/// `default_page_size` only seeds the page size at mount.
#[component]
pub fn AssetsTable(
    data: Vec<Asset>,
    #[props(default = false)] loading: bool,
    #[props(default)] size: TableSize,
    #[props(default = false)] bordered: bool,
    #[props(default)] default_page_size: PageSize,
) -> Element {
    let pagination = use_signal(|| Pagination::default().with_page_size(default_page_size));
    let sort = use_signal(|| None::<SortState>);

    let total = data.len();
    let rows = sort_assets(&data, sort());
    let page_rows: Vec<Asset> = rows[pagination().range(total)]
        .iter()
        .copied()
        .cloned()
        .collect();

    let size_class: &'static str = size.into();
    let table_class = format!(
        "assets-table table-{}{}",
        size_class,
        if bordered { " table-bordered" } else { "" }
    );

    rsx! {
        div {
            class: "assets-table-wrapper",
            style: "position: relative;",

            PaginationControls { total, pagination, item_label: "Assets" }

            div {
                style: "overflow-x: auto;",
                table {
                    class: "{table_class}",
                    thead {
                        tr {
                            th { style: "width: 2.75rem; padding-right: 0;" }
                            SortableHeader { title: "Name", column: SortableColumn::Name, sort, style: "width: 28%;" }
                            SortableHeader { title: "Quantity", column: SortableColumn::Quantity, sort, style: "width: 25%;" }
                            SortableHeader { title: "Policy ID", column: SortableColumn::PolicyId, sort, style: "text-align: right;" }
                            SortableHeader { title: "Fingerprint", column: SortableColumn::Fingerprint, sort, style: "text-align: right;" }
                        }
                    }
                    tbody {
                        if page_rows.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    style: "text-align: center; padding: 1.5rem 0; color: var(--pico-muted-color);",
                                    "No Data"
                                }
                            }
                        }
                        for asset in page_rows {
                            AssetRow {
                                key: "{row_key(&asset)}",
                                asset: asset.clone(),
                            }
                        }
                    }
                }
            }

            PaginationControls { total, pagination, item_label: "Assets" }

            if loading {
                div {
                    class: "table-spinner",
                    "aria-busy": "true",
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: color-mix(in srgb, var(--pico-background-color), transparent 30%); z-index: 10;",
                }
            }
        }
    }
}
