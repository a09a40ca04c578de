//! Search, sort and paging over the asset list.
//!
//! These functions never touch the source collection: filtering clones the
//! matching rows, sorting and paging work on borrowed rows.

use std::cmp::Ordering;
use std::ops::Range;

use api::assets::asset::Asset;

/// An asset matches when the query is a case-insensitive substring of its
/// display name, fingerprint or policy id. An empty query matches everything.
pub fn matches_search(asset: &Asset, query: &str) -> bool {
    let query = query.to_lowercase();
    [
        asset.display_name(),
        asset.fingerprint.clone(),
        asset.policy_id.clone(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_assets(assets: &[Asset], query: &str) -> Vec<Asset> {
    assets
        .iter()
        .filter(|asset| matches_search(asset, query))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortableColumn {
    Name,
    Quantity,
    PolicyId,
    Fingerprint,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortState {
    pub column: SortableColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click cycle: ascending, descending, unsorted.
    /// Clicking another column starts it at ascending.
    pub fn toggle(current: Option<SortState>, clicked: SortableColumn) -> Option<SortState> {
        match current {
            Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }) if column == clicked => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                column,
                direction: SortDirection::Descending,
            }) if column == clicked => None,
            _ => Some(SortState {
                column: clicked,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

/// Locale-style name ordering: case-insensitive first, raw text as tie breaker.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn compare_assets(column: SortableColumn, a: &Asset, b: &Asset) -> Ordering {
    match column {
        SortableColumn::Name => compare_names(&a.display_name(), &b.display_name()),
        SortableColumn::Quantity => a.quantity.cmp_scaled(a.decimals(), &b.quantity, b.decimals()),
        // The policy id column orders by fingerprint, same as the fingerprint column.
        SortableColumn::PolicyId | SortableColumn::Fingerprint => a.fingerprint.cmp(&b.fingerprint),
    }
}

/// Key identifying a table row across filtering, sorting and paging.
pub fn row_key(asset: &Asset) -> &str {
    &asset.fingerprint
}

/// Returns the rows in display order. Input order is kept when unsorted and for ties.
pub fn sort_assets(assets: &[Asset], sort: Option<SortState>) -> Vec<&Asset> {
    let mut rows: Vec<&Asset> = assets.iter().collect();
    if let Some(SortState { column, direction }) = sort {
        rows.sort_by(|a, b| {
            let ordering = compare_assets(column, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
pub enum PageSize {
    #[default]
    #[strum(serialize = "25")]
    TwentyFive,
    #[strum(serialize = "50")]
    Fifty,
    #[strum(serialize = "100")]
    Hundred,
}

impl PageSize {
    pub fn rows(&self) -> usize {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

/// The visible page of a table. Pages are numbered from 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pagination {
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl Pagination {
    /// Always at least one page, so an empty table still has a page to show.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows()).max(1)
    }

    /// Pulls the page back inside `1..=page_count` after the row count shrank.
    pub fn clamped(self, total: usize) -> Self {
        Self {
            page: self.page.clamp(1, self.page_count(total)),
            ..self
        }
    }

    /// Switches page size and returns to the first page.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// The page before this one, staying on the first page.
    pub fn previous(self) -> Self {
        self.with_page(self.page.saturating_sub(1).max(1))
    }

    /// The page after this one, staying on the last page of `total` rows.
    pub fn next(self, total: usize) -> Self {
        self.with_page(self.page.saturating_add(1)).clamped(total)
    }

    /// Row indices on the current (clamped) page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let page = self.clamped(total).page;
        let start = (page - 1) * self.page_size.rows();
        start.min(total)..(start + self.page_size.rows()).min(total)
    }
}

/// One slot in the page selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons around `current`: first and last page always, two neighbours
/// on each side, gaps shown as an ellipsis.
pub fn page_items(current: usize, count: usize) -> Vec<PageItem> {
    const NEIGHBOURS: usize = 2;

    if count <= 2 * NEIGHBOURS + 3 {
        return (1..=count).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, count);
    let window_start = current.saturating_sub(NEIGHBOURS).max(2);
    let window_end = (current + NEIGHBOURS).min(count - 1);

    let mut items = vec![PageItem::Page(1)];
    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((window_start..=window_end).map(PageItem::Page));
    if window_end < count - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(count));
    items
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use api::assets::quantity::Quantity;
    use strum::IntoEnumIterator;

    fn asset(name: &str, fingerprint: &str, policy_id: &str, quantity: &str, decimals: u8) -> Asset {
        Asset {
            policy_id: policy_id.to_string(),
            asset_name: hex_name(name),
            asset_name_ascii: Some(name.to_string()),
            fingerprint: fingerprint.to_string(),
            quantity: quantity.parse::<Quantity>().unwrap(),
            decimals: Some(decimals),
        }
    }

    fn hex_name(name: &str) -> String {
        name.bytes().map(|b| format!("{:02x}", b)).collect()
    }

    fn sample() -> Vec<Asset> {
        vec![
            asset("HOSKY", "asset1hosky", "a0028f35", "1000000", 0),
            asset("agix", "asset1agix", "f43a62fd", "25000000000", 8),
            asset("Book", "asset1book", "b0000000", "100", 2),
            asset("DJED", "asset1djed", "8db26982", "50", 0),
        ]
    }

    fn fingerprints(rows: &[&Asset]) -> Vec<String> {
        rows.iter().map(|a| a.fingerprint.clone()).collect()
    }

    #[test]
    fn search_checks_name_fingerprint_and_policy() {
        let assets = sample();
        assert_eq!(filter_assets(&assets, "hos").len(), 1);
        assert_eq!(filter_assets(&assets, "ASSET1AGIX")[0].fingerprint, "asset1agix");
        assert_eq!(filter_assets(&assets, "8DB2")[0].fingerprint, "asset1djed");
        assert!(filter_assets(&assets, "nothing-like-this").is_empty());
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let assets = sample();
        assert_eq!(filter_assets(&assets, ""), assets);
    }

    #[test]
    fn undecodable_name_still_matches_other_fields() {
        let mut broken = asset("x", "asset1broken", "cafe", "1", 0);
        broken.asset_name = "not-hex".to_string();
        assert!(matches_search(&broken, "broken"));
        assert!(!matches_search(&broken, "x1"));
    }

    #[test]
    fn filtering_leaves_source_untouched() {
        let assets = sample();
        let before = assets.clone();
        let _ = filter_assets(&assets, "a");
        let _ = sort_assets(&assets, SortState::toggle(None, SortableColumn::Name));
        assert_eq!(assets, before);
    }

    #[test]
    fn quantity_sort_uses_decimal_value() {
        let assets = sample();
        let asc = SortState::toggle(None, SortableColumn::Quantity);
        // Book 1.00, DJED 50, agix 250, HOSKY 1,000,000
        assert_eq!(
            fingerprints(&sort_assets(&assets, asc)),
            ["asset1book", "asset1djed", "asset1agix", "asset1hosky"]
        );

        let desc = SortState::toggle(asc, SortableColumn::Quantity);
        assert_eq!(
            fingerprints(&sort_assets(&assets, desc)),
            ["asset1hosky", "asset1agix", "asset1djed", "asset1book"]
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let assets = sample();
        let rows = sort_assets(&assets, SortState::toggle(None, SortableColumn::Name));
        let names: Vec<String> = rows.iter().map(|a| a.display_name()).collect();
        assert_eq!(names, ["agix", "Book", "DJED", "HOSKY"]);
    }

    #[test]
    fn policy_column_orders_by_fingerprint() {
        let assets = sample();
        let by_policy = sort_assets(&assets, SortState::toggle(None, SortableColumn::PolicyId));
        let by_fingerprint =
            sort_assets(&assets, SortState::toggle(None, SortableColumn::Fingerprint));
        assert_eq!(fingerprints(&by_policy), fingerprints(&by_fingerprint));
    }

    #[test]
    fn header_clicks_cycle_sort() {
        let asc = SortState::toggle(None, SortableColumn::Name);
        assert_eq!(asc.map(|s| s.direction), Some(SortDirection::Ascending));
        let desc = SortState::toggle(asc, SortableColumn::Name);
        assert_eq!(desc.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(SortState::toggle(desc, SortableColumn::Name), None);

        let other = SortState::toggle(desc, SortableColumn::Quantity);
        assert_eq!(
            other,
            Some(SortState {
                column: SortableColumn::Quantity,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let assets = sample();
        let rows = sort_assets(&assets, None);
        assert_eq!(
            fingerprints(&rows),
            ["asset1hosky", "asset1agix", "asset1book", "asset1djed"]
        );
    }

    #[test]
    fn page_sizes_parse_from_option_values() {
        let sizes: Vec<usize> = PageSize::iter().map(|size| size.rows()).collect();
        assert_eq!(sizes, [25, 50, 100]);
        assert_eq!(PageSize::from_str("50").unwrap(), PageSize::Fifty);
        assert_eq!(PageSize::Hundred.to_string(), "100");
        assert!(PageSize::from_str("10").is_err());
        assert_eq!(PageSize::default(), PageSize::TwentyFive);
    }

    #[test]
    fn pagination_ranges_and_clamping() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(51), 3);
        assert_eq!(pagination.range(0), 0..0);
        assert_eq!(pagination.with_page(3).range(51), 50..51);

        // the filtered set shrank below page 3
        let shrunk = pagination.with_page(3).clamped(30);
        assert_eq!(shrunk.page, 2);
        assert_eq!(pagination.with_page(3).range(30), 25..30);
    }

    #[test]
    fn clamping_keeps_page_size() {
        let pagination = Pagination::default().with_page_size(PageSize::Fifty);
        let assets = sample();
        let filtered = filter_assets(&assets, "hosky");
        let visible = pagination.clamped(filtered.len());
        assert_eq!(visible.page_size, PageSize::Fifty);
        assert_eq!(visible.range(filtered.len()), 0..1);
    }

    #[test]
    fn row_keys_are_fingerprints_in_any_order() {
        let assets = sample();
        let by_name = sort_assets(&assets, SortState::toggle(None, SortableColumn::Name));
        let keys: Vec<&str> = by_name.iter().map(|a| row_key(a)).collect();
        assert_eq!(keys, fingerprints(&by_name));

        let filtered = filter_assets(&assets, "a0028f35");
        assert_eq!(row_key(&filtered[0]), "asset1hosky");
    }

    #[test]
    fn stepping_pages_stays_in_bounds() {
        let first = Pagination::default();
        assert_eq!(first.previous().page, 1);
        assert_eq!(first.with_page(0).previous().page, 1);
        assert_eq!(first.next(60).page, 2);
        assert_eq!(first.with_page(3).next(60).page, 3);
        assert_eq!(first.next(0).page, 1);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let pagination = Pagination::default().with_page(4).with_page_size(PageSize::Hundred);
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn page_items_collapse_long_ranges() {
        use PageItem::*;
        assert_eq!(page_items(1, 1), [Page(1)]);
        assert_eq!(page_items(3, 7).len(), 7);
        assert_eq!(
            page_items(1, 20),
            [Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(10, 20),
            [Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(20, 20),
            [Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }
}
