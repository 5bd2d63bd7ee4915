use std::cmp::Ordering;

use super::model::ContentItem;

/// View-side list state. Changing the filter always snaps back to the
/// first page so the new result set is shown from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub filter: Option<String>,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        ListState {
            filter: None,
            page: 1,
        }
    }
}

impl ListState {
    pub fn with_filter(self, filter: Option<String>) -> Self {
        ListState { filter, page: 1 }
    }

    pub fn with_page(self, page: usize) -> Self {
        ListState {
            page: page.max(1),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub featured: Option<T>,
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

/// Most recent first. Items without a parseable timestamp order after
/// every dated item and keep their source order among themselves; the
/// sort is stable so ties never shuffle.
pub fn sort_by_recency<T: ContentItem>(items: &mut [T]) {
    items.sort_by(|a, b| match (a.published(), b.published()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Pure presenter over an already-fetched collection: sort, optionally
/// split off the most recent item as "featured", filter by exact
/// category, then slice a 1-based page. Pages past the end are empty
/// rather than an error.
pub fn present<T: ContentItem + Clone>(
    items: &[T],
    state: &ListState,
    page_size: usize,
    split_featured: bool,
) -> ListView<T> {
    let mut sorted = items.to_vec();
    sort_by_recency(&mut sorted);

    let mut rest = sorted;
    let featured = if split_featured && !rest.is_empty() {
        Some(rest.remove(0))
    } else {
        None
    };

    let filtered: Vec<T> = match &state.filter {
        Some(category) => rest
            .into_iter()
            .filter(|item| item.category() == category)
            .collect(),
        None => rest,
    };

    let total_pages = filtered.len().div_ceil(page_size);
    let start = (state.page - 1) * page_size;
    let page_items = filtered.into_iter().skip(start).take(page_size).collect();

    ListView {
        featured,
        items: page_items,
        page: state.page,
        total_pages,
    }
}

/// Distinct categories in the order they appear, for the filter chips.
pub fn categories<T: ContentItem>(items: &[T]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !item.category().is_empty() && !seen.iter().any(|c| c == item.category()) {
            seen.push(item.category().to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::parse_timestamp;
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        category: String,
        published: Option<NaiveDateTime>,
    }

    impl ContentItem for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn published(&self) -> Option<NaiveDateTime> {
            self.published
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    fn item(id: &str, category: &str, date: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            category: category.to_string(),
            published: date.and_then(parse_timestamp),
        }
    }

    #[test]
    fn featured_is_the_most_recent_item() {
        let items = vec![
            item("1", "Umum", Some("2024-01-01")),
            item("2", "Umum", Some("2024-03-01")),
        ];
        let view = present(&items, &ListState::default(), 9, true);
        assert_eq!(view.featured.unwrap().id, "2");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "1");
    }

    #[test]
    fn empty_collection_has_no_featured_and_no_pages() {
        let view = present::<Item>(&[], &ListState::default(), 9, true);
        assert!(view.featured.is_none());
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn undated_items_sort_last_and_keep_source_order() {
        let mut items = vec![
            item("a", "Umum", None),
            item("b", "Umum", Some("2024-02-01")),
            item("c", "Umum", None),
            item("d", "Umum", Some("2024-05-01")),
        ];
        sort_by_recency(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["d", "b", "a", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut items = vec![
            item("a", "Umum", Some("2023-12-01")),
            item("b", "Umum", None),
            item("c", "Umum", Some("2024-06-15")),
        ];
        sort_by_recency(&mut items);
        let once = items.clone();
        sort_by_recency(&mut items);
        assert_eq!(items, once);
    }

    #[test]
    fn pages_partition_the_filtered_collection() {
        let items: Vec<Item> = (1..=20)
            .map(|n| item(&n.to_string(), "Umum", Some(&format!("2024-01-{:02}", n))))
            .collect();
        let page_size = 9;

        let first = present(&items, &ListState::default(), page_size, false);
        assert_eq!(first.total_pages, 3);

        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            let view = present(
                &items,
                &ListState::default().with_page(page),
                page_size,
                false,
            );
            collected.extend(view.items);
        }
        assert_eq!(collected.len(), items.len());
        let mut ids: Vec<String> = collected.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items = vec![item("1", "Umum", Some("2024-01-01"))];
        let view = present(&items, &ListState::default().with_page(99), 9, false);
        assert!(view.items.is_empty());
        assert_eq!(view.page, 99);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn changing_the_filter_resets_to_page_one() {
        let state = ListState::default().with_page(3);
        assert_eq!(state.page, 3);
        let state = state.with_filter(Some("CCTV Installation".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filter.as_deref(), Some("CCTV Installation"));
    }

    #[test]
    fn filtered_out_items_never_appear_on_any_page() {
        let items = vec![
            item("1", "Website Development", Some("2024-01-01")),
            item("2", "CCTV Installation", Some("2024-01-02")),
            item("3", "CCTV Installation", Some("2024-01-03")),
            item("4", "IT Support", Some("2024-01-04")),
        ];
        let state = ListState::default().with_filter(Some("CCTV Installation".to_string()));
        let view = present(&items, &state, 9, false);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.items.len(), 2);
        assert!(view.items.iter().all(|i| i.category == "CCTV Installation"));
    }

    #[test]
    fn category_chips_are_distinct_and_in_source_order() {
        let items = vec![
            item("1", "Website Development", None),
            item("2", "CCTV Installation", None),
            item("3", "Website Development", None),
            item("4", "", None),
        ];
        assert_eq!(
            categories(&items),
            vec!["Website Development".to_string(), "CCTV Installation".to_string()]
        );
    }
}
