//! Pure filter/sort/paginate pipeline.
//!
//! Deterministic derivation functions composed by the list controller on
//! every render: no I/O, no shared state. They are independently importable
//! by any table-shaped screen.

use std::cmp::Ordering;

use crate::model::{UserRecord, UserStatus};

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
    Mobile,
    Status,
    Country,
}

impl SortField {
    fn key<'a>(self, record: &'a UserRecord) -> &'a str {
        match self {
            SortField::FirstName => &record.first_name,
            SortField::LastName => &record.last_name,
            SortField::Email => &record.email,
            SortField::Mobile => &record.mobile,
            SortField::Status => record.status.as_str(),
            SortField::Country => &record.country,
        }
    }
}

/// Status tab selection: everything, or one status value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: &UserStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Filter values owned by the list view.
///
/// The per-field values back the toolbar's field inputs; `search_term` is
/// the free-text search. Status and text conditions are AND-combined; the
/// text term matches first name OR last name OR email.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilters {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub status: StatusFilter,
    pub search_term: String,
}

impl UserFilters {
    /// Whether any narrowing condition is active (gates the "clear
    /// filters" affordance and the distinct empty-state message).
    pub fn can_reset(&self) -> bool {
        !self.search_term.is_empty()
            || self.status != StatusFilter::All
            || !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.email.is_empty()
            || !self.mobile.is_empty()
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Narrow and order a snapshot.
///
/// Status first (skipped for [`StatusFilter::All`]), then the free-text
/// term as a case-insensitive substring over first name, last name, or
/// email, then any per-field values, then a stable sort with `comparator`.
pub fn apply_filter<F>(records: &[UserRecord], filters: &UserFilters, comparator: F) -> Vec<UserRecord>
where
    F: Fn(&UserRecord, &UserRecord) -> Ordering,
{
    let mut filtered: Vec<UserRecord> = records
        .iter()
        .filter(|r| filters.status.matches(&r.status))
        .filter(|r| {
            if filters.search_term.is_empty() {
                return true;
            }
            let term = filters.search_term.to_lowercase();
            contains_ci(&r.first_name, &term)
                || contains_ci(&r.last_name, &term)
                || contains_ci(&r.email, &term)
        })
        .filter(|r| {
            filters.first_name.is_empty()
                || contains_ci(&r.first_name, &filters.first_name.to_lowercase())
        })
        .filter(|r| {
            filters.last_name.is_empty()
                || contains_ci(&r.last_name, &filters.last_name.to_lowercase())
        })
        .filter(|r| filters.email.is_empty() || contains_ci(&r.email, &filters.email.to_lowercase()))
        .filter(|r| filters.mobile.is_empty() || r.mobile.contains(&filters.mobile))
        .cloned()
        .collect();

    // sort_by is stable, so ties keep their server-relative order.
    filtered.sort_by(comparator);
    filtered
}

/// Two-argument comparator for the active sort column.
///
/// `Desc` reverses the natural ascending comparison of the field.
pub fn get_comparator(
    direction: SortDirection,
    field: SortField,
) -> impl Fn(&UserRecord, &UserRecord) -> Ordering {
    move |a, b| {
        let ordering = field.key(a).cmp(field.key(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// The page-sized window `[page*rows_per_page, page*rows_per_page + rows_per_page)`,
/// clamped to the array bounds.
pub fn row_in_page(records: &[UserRecord], page: usize, rows_per_page: usize) -> Vec<UserRecord> {
    let start = page.saturating_mul(rows_per_page).min(records.len());
    let end = start.saturating_add(rows_per_page).min(records.len());
    records[start..end].to_vec()
}

/// Padding-row count for fixed-height rendering of a partial last page.
///
/// Zero on the first page; never negative; never more than a full page.
pub fn empty_rows(page: usize, rows_per_page: usize, total: usize) -> usize {
    if page == 0 {
        return 0;
    }
    ((page + 1).saturating_mul(rows_per_page))
        .saturating_sub(total)
        .min(rows_per_page)
}

/// Empty-state gate: the filtered set came back empty. Distinct from a
/// loading state, which the presentation layer tracks itself.
pub fn not_found(filtered: &[UserRecord]) -> bool {
    filtered.is_empty()
}

/// One status tab with its record count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTab {
    pub value: StatusFilter,
    pub label: &'static str,
    pub count: usize,
}

/// Tab row derived from the full (pre-filter) collection.
pub fn status_tabs(records: &[UserRecord]) -> Vec<StatusTab> {
    let count_of = |status: &UserStatus| records.iter().filter(|r| &r.status == status).count();
    vec![
        StatusTab {
            value: StatusFilter::All,
            label: "All",
            count: records.len(),
        },
        StatusTab {
            value: StatusFilter::Only(UserStatus::Active),
            label: "Active",
            count: count_of(&UserStatus::Active),
        },
        StatusTab {
            value: StatusFilter::Only(UserStatus::Suspended),
            label: "Suspended",
            count: count_of(&UserStatus::Suspended),
        },
    ]
}
