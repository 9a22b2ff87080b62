//! Category and text filtering over the static catalogs.
//!
//! Pages own a [`FilterState`] through `use_state`, apply one of the command
//! methods on a clone and set it back. [`visible_items`] is recomputed on
//! every render; catalogs are a dozen entries, so there is no caching.

use crate::disclosure::Disclosure;

/// A fixed set of filter tabs for one page. The first entry of [`Category::ALL`]
/// is the "all" sentinel.
pub trait Category: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn is_all(self) -> bool {
        Self::ALL.first() == Some(&self)
    }
}

pub trait CatalogItem {
    type Category: Category;

    fn has_category(&self, category: Self::Category) -> bool;

    /// Title and body text joined, used for search matching.
    fn searchable_text(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterState<C> {
    pub selected_category: C,
    pub search_query: String,
    pub expanded: Disclosure<usize>,
}

impl<C: Category> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            selected_category: C::ALL[0],
            search_query: String::new(),
            expanded: Disclosure::new(),
        }
    }
}

impl<C: Category> FilterState<C> {
    pub fn select_category<T>(&mut self, category: C, catalog: &[T])
    where
        T: CatalogItem<Category = C>,
    {
        self.selected_category = category;
        self.collapse_hidden(catalog);
    }

    pub fn set_search_query<T>(&mut self, query: impl Into<String>, catalog: &[T])
    where
        T: CatalogItem<Category = C>,
    {
        self.search_query = query.into();
        self.collapse_hidden(catalog);
    }

    /// Open or close the item at catalog index `index`.
    pub fn toggle_item(&mut self, index: usize) {
        self.expanded.toggle(index);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.is_expanded(&index)
    }

    // The open item must stay visible; a filter change that hides it closes it.
    fn collapse_hidden<T>(&mut self, catalog: &[T])
    where
        T: CatalogItem<Category = C>,
    {
        let category = self.selected_category;
        let query = self.search_query.clone();
        self.expanded.retain(|index| {
            catalog
                .get(*index)
                .map(|item| item_matches(item, category, &query))
                .unwrap_or(false)
        });
    }
}

pub fn matches_category<T: CatalogItem>(item: &T, category: T::Category) -> bool {
    category.is_all() || item.has_category(category)
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

fn item_matches<T: CatalogItem>(item: &T, category: T::Category, query: &str) -> bool {
    matches_category(item, category) && matches_query(&item.searchable_text(), query)
}

/// Items passing both the category and the search predicate, in catalog
/// order, paired with their catalog index.
pub fn visible_items<'a, T: CatalogItem>(
    catalog: &'a [T],
    state: &FilterState<T::Category>,
) -> Vec<(usize, &'a T)> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| item_matches(*item, state.selected_category, &state.search_query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Tag {
        All,
        Red,
        Blue,
        Green,
    }

    impl Category for Tag {
        const ALL: &'static [Self] = &[Tag::All, Tag::Red, Tag::Blue, Tag::Green];

        fn label(self) -> &'static str {
            match self {
                Tag::All => "All",
                Tag::Red => "Red",
                Tag::Blue => "Blue",
                Tag::Green => "Green",
            }
        }
    }

    #[derive(Clone, Debug)]
    struct Item {
        tags: Vec<Tag>,
        text: String,
    }

    impl CatalogItem for Item {
        type Category = Tag;

        fn has_category(&self, category: Tag) -> bool {
            self.tags.contains(&category)
        }

        fn searchable_text(&self) -> String {
            self.text.clone()
        }
    }

    fn item(tags: &[Tag], text: &str) -> Item {
        Item {
            tags: tags.to_vec(),
            text: text.to_string(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item(&[Tag::Red], "Apple pie"),
            item(&[Tag::Blue, Tag::Red], "Blueberry tart"),
            item(&[Tag::Blue], "Sky"),
            item(&[Tag::Red], "Cherry"),
        ]
    }

    #[test]
    fn all_sentinel_is_first_tab() {
        assert!(Tag::All.is_all());
        assert!(!Tag::Red.is_all());
        let state: FilterState<Tag> = FilterState::default();
        assert_eq!(state.selected_category, Tag::All);
        assert!(state.search_query.is_empty());
        assert_eq!(state.expanded.expanded(), None);
    }

    #[test]
    fn category_filter_keeps_catalog_order() {
        let catalog = sample();
        let mut state: FilterState<Tag> = FilterState::default();
        state.select_category(Tag::Red, &catalog);
        let indexes: Vec<usize> = visible_items(&catalog, &state).iter().map(|(i, _)| *i).collect();
        assert_eq!(indexes, vec![0, 1, 3]);
    }

    #[test]
    fn category_and_query_are_and_ed() {
        let catalog = sample();
        let mut state: FilterState<Tag> = FilterState::default();
        state.select_category(Tag::Blue, &catalog);
        state.set_search_query("TART", &catalog);
        let visible = visible_items(&catalog, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 1);
    }

    #[test]
    fn empty_result_is_a_valid_state() {
        let catalog = sample();
        let mut state: FilterState<Tag> = FilterState::default();
        state.select_category(Tag::Green, &catalog);
        assert!(visible_items(&catalog, &state).is_empty());
    }

    #[test]
    fn filter_change_closes_item_that_disappears() {
        let catalog = sample();
        let mut state: FilterState<Tag> = FilterState::default();
        state.toggle_item(2);
        assert!(state.is_expanded(2));

        state.select_category(Tag::Blue, &catalog);
        assert!(state.is_expanded(2), "still visible under Blue");

        state.select_category(Tag::Red, &catalog);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn search_change_keeps_item_that_still_matches() {
        let catalog = sample();
        let mut state: FilterState<Tag> = FilterState::default();
        state.toggle_item(3);
        state.set_search_query("cher", &catalog);
        assert!(state.is_expanded(3));
        state.set_search_query("sky", &catalog);
        assert!(!state.is_expanded(3));
    }

    #[test]
    fn query_matching_is_case_insensitive() {
        assert!(matches_query("Is there any refund policy?", "REFUND"));
        assert!(matches_query("anything", ""));
        assert!(!matches_query("anything", "nothing"));
    }

    fn arb_tag() -> impl Strategy<Value = Tag> {
        prop_oneof![Just(Tag::Red), Just(Tag::Blue), Just(Tag::Green)]
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Item>> {
        proptest::collection::vec(
            (proptest::collection::vec(arb_tag(), 1..3), "[a-zA-Z ]{0,12}")
                .prop_map(|(tags, text)| Item { tags, text }),
            0..16,
        )
    }

    proptest! {
        #[test]
        fn category_filter_is_exact(catalog in arb_catalog(), pick in 0usize..4) {
            let category = Tag::ALL[pick];
            let mut state: FilterState<Tag> = FilterState::default();
            state.select_category(category, &catalog);
            let visible = visible_items(&catalog, &state);

            if category.is_all() {
                prop_assert_eq!(visible.len(), catalog.len());
            }
            for (_, item) in &visible {
                prop_assert!(category.is_all() || item.tags.contains(&category));
            }
            let expected = catalog
                .iter()
                .filter(|item| category.is_all() || item.tags.contains(&category))
                .count();
            prop_assert_eq!(visible.len(), expected);
        }

        #[test]
        fn search_is_sound_and_complete(catalog in arb_catalog(), query in "[a-zA-Z]{0,3}") {
            let mut state: FilterState<Tag> = FilterState::default();
            state.set_search_query(query.clone(), &catalog);
            let visible: Vec<usize> = visible_items(&catalog, &state).iter().map(|(i, _)| *i).collect();
            let needle = query.to_lowercase();
            for (i, item) in catalog.iter().enumerate() {
                let contains = item.text.to_lowercase().contains(&needle);
                prop_assert_eq!(visible.contains(&i), contains);
            }
        }

        #[test]
        fn visible_indexes_are_increasing(catalog in arb_catalog(), pick in 0usize..4, query in "[a-z]{0,2}") {
            let mut state: FilterState<Tag> = FilterState::default();
            state.select_category(Tag::ALL[pick], &catalog);
            state.set_search_query(query, &catalog);
            let visible = visible_items(&catalog, &state);
            prop_assert!(visible.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
