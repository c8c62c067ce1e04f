//! Filter/sort stage shared by every list page, plus the search box.
//!
//! Everything before the components is pure: the displayed rows are always
//! `derive_view(collection, query)` and the collection itself is never
//! reordered.

use contracts::domain::common::ResourceItem;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Items the search box can match.
pub trait Searchable {
    /// Stringified fields the search term is matched against.
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match on any searched field. An empty
    /// term matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Items that can be ordered by a named column.
pub trait Sortable {
    fn get_field_value(&self, field: &str) -> Option<String>;

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        compare_field_values(
            self.get_field_value(field).as_deref(),
            other.get_field_value(field).as_deref(),
        )
    }
}

/// Missing values first, then numbers in numeric order, then everything
/// else lexicographically.
pub fn compare_field_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (parse_finite(a), parse_finite(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

/// View derivation state of one list. Never sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort: Option<SortState>,
    pub status_filter: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status_filter: Some(status.into()),
            ..Self::default()
        }
    }

    /// Same column flips the direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(sort) if sort.field == field => sort.ascending = !sort.ascending,
            _ => {
                self.sort = Some(SortState {
                    field: field.to_string(),
                    ascending: true,
                })
            }
        }
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.field.as_str())
    }
}

/// Stable sort, so equal keys keep their collection order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Status filter, then search, then sort.
pub fn derive_view<T>(items: &[T], query: &ListQuery) -> Vec<T>
where
    T: ResourceItem + Searchable + Sortable,
{
    let mut rows = match &query.status_filter {
        Some(status) => {
            let in_status: Vec<T> = items
                .iter()
                .filter(|item| item.status() == Some(status.as_str()))
                .cloned()
                .collect();
            filter_list(&in_status, &query.search)
        }
        None => filter_list(items, &query.search),
    };
    if let Some(sort) = &query.sort {
        sort_list(&mut rows, &sort.field, sort.ascending);
    }
    rows
}

pub fn get_sort_indicator(query: &ListQuery, field: &str) -> &'static str {
    match &query.sort {
        Some(sort) if sort.field == field => {
            if sort.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// Search box with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                (!value.get().is_empty())
                    .then(|| {
                        view! {
                            <button
                                class="search-input__clear"
                                title="Clear search"
                                on:click=move |_| on_change.run(String::new())
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        count: Option<String>,
        status: String,
    }

    impl ResourceItem for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn status(&self) -> Option<&str> {
            Some(&self.status)
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.clone()]
        }
    }

    impl Sortable for Row {
        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "id" => Some(self.id.to_string()),
                "name" => Some(self.name.clone()),
                "count" => self.count.clone(),
                _ => None,
            }
        }
    }

    fn row(id: u32, name: &str, count: Option<&str>, status: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
            count: count.map(str::to_string),
            status: status.to_string(),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(10, "Pasta", Some("3"), "Pending"),
            row(2, "pizza", Some("12"), "Delivered"),
            row(7, "Salad", None, "Pending"),
            row(31, "Soup", Some("3"), "Cancelled"),
        ]
    }

    #[test]
    fn search_keeps_exactly_the_matching_items() {
        let items = sample();
        let found = filter_list(&items, "PA");
        let ids: Vec<u32> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10]);

        let found = filter_list(&items, "s");
        let ids: Vec<u32> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 7, 31]);

        for item in &items {
            let kept = found.contains(item);
            let expected = item
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("s"));
            assert_eq!(kept, expected);
        }
    }

    #[test]
    fn empty_search_keeps_everything() {
        assert_eq!(filter_list(&sample(), "").len(), 4);
    }

    #[test]
    fn numeric_columns_sort_numerically() {
        let mut items = sample();
        sort_list(&mut items, "id", true);
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 7, 10, 31]);
    }

    #[test]
    fn missing_values_sort_first_and_ties_keep_order() {
        let mut items = sample();
        sort_list(&mut items, "count", true);
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 10, 31, 2]);
    }

    #[test]
    fn sorting_twice_is_idempotent_and_toggle_reverses() {
        let mut once = sample();
        sort_list(&mut once, "name", true);
        let mut twice = once.clone();
        sort_list(&mut twice, "name", true);
        assert_eq!(once, twice);

        let mut desc = sample();
        sort_list(&mut desc, "name", false);
        let reversed: Vec<Row> = once.iter().rev().cloned().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn mixed_number_and_text_columns_sort_totally() {
        assert_eq!(compare_field_values(Some("9"), Some("10")), Ordering::Less);
        assert_eq!(compare_field_values(Some("10"), Some("1a")), Ordering::Less);
        assert_eq!(compare_field_values(Some("9"), Some("1a")), Ordering::Less);

        let mut items: Vec<Row> = (0..200u32)
            .map(|i| {
                let count = if i % 3 == 0 {
                    format!("{}a", (i * 7) % 50)
                } else {
                    ((i * 13) % 97).to_string()
                };
                row(i, "x", Some(count.as_str()), "Pending")
            })
            .collect();
        sort_list(&mut items, "count", true);
        let once = items.clone();
        sort_list(&mut items, "count", true);
        assert_eq!(items, once);

        let first_text = items
            .iter()
            .position(|r| r.count.as_deref().is_some_and(|c| c.ends_with('a')))
            .unwrap();
        assert!(items[..first_text]
            .iter()
            .all(|r| r.count.as_deref().is_some_and(|c| c.parse::<f64>().is_ok())));
        assert!(items[first_text..]
            .iter()
            .all(|r| r.count.as_deref().is_some_and(|c| c.ends_with('a'))));
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut query = ListQuery::new();
        query.toggle_sort("id");
        assert_eq!(query.sort.as_ref().map(|s| s.ascending), Some(true));
        query.toggle_sort("id");
        assert_eq!(query.sort.as_ref().map(|s| s.ascending), Some(false));
        query.toggle_sort("name");
        assert_eq!(
            query.sort,
            Some(SortState {
                field: "name".into(),
                ascending: true
            })
        );
        assert_eq!(get_sort_indicator(&query, "name"), " ▲");
        assert_eq!(get_sort_indicator(&query, "id"), " ⇅");
    }

    #[test]
    fn derive_view_applies_status_search_and_sort() {
        let items = sample();
        let mut query = ListQuery::with_status("Pending");
        query.toggle_sort("id");
        let rows = derive_view(&items, &query);
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 10]);

        query.search = "sal".into();
        assert_eq!(derive_view(&items, &query).len(), 1);
        assert_eq!(items, sample());
    }
}
