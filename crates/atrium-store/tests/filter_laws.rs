//! Property tests for the filter engine laws

use atrium_store::{apply_filters, FilterKey, FilterQuery, Searchable};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    name: String,
    role: String,
}

impl Searchable for Row {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Role => Some(self.role.clone()),
            _ => None,
        }
    }
}

fn row_strategy() -> impl Strategy<Value = Row> {
    ("[a-zA-Z ]{0,24}", prop_oneof!["manager", "employee", "resident"]).prop_map(
        |(name, role)| Row {
            name,
            role: role.to_string(),
        },
    )
}

proptest! {
    /// Empty query returns the input unchanged, order included.
    #[test]
    fn empty_query_is_identity(records in prop::collection::vec(row_strategy(), 0..40)) {
        let visible = apply_filters(&records, &FilterQuery::new());
        prop_assert_eq!(visible, records);
    }

    /// A record whose haystack contains the needle is always included
    /// when no selections constrain it.
    #[test]
    fn containment_implies_inclusion(
        records in prop::collection::vec(row_strategy(), 1..40),
        pick in any::<prop::sample::Index>(),
        start in 0usize..8,
        len in 1usize..8,
    ) {
        let target = pick.get(&records);
        let chars: Vec<char> = target.name.chars().collect();
        prop_assume!(!chars.is_empty());

        let start = start.min(chars.len() - 1);
        let end = (start + len).min(chars.len());
        let needle: String = chars[start..end].iter().collect();
        prop_assume!(!needle.trim().is_empty());

        let query = FilterQuery::new().with_search(needle.clone());
        let visible = apply_filters(&records, &query);

        let needle_lower = needle.to_lowercase();
        prop_assert!(
            visible.iter().any(|r| r == target),
            "record {:?} contains {:?} but was filtered out",
            target,
            needle_lower
        );
    }

    /// Every record in the output satisfies every selection.
    #[test]
    fn selections_are_sound(
        records in prop::collection::vec(row_strategy(), 0..40),
        role in prop_oneof!["manager", "employee", "resident"],
    ) {
        let query = FilterQuery::new().with_selection(FilterKey::Role, role.clone());
        let visible = apply_filters(&records, &query);

        prop_assert!(visible.iter().all(|r| r.role == role));

        let expected = records.iter().filter(|r| r.role == role).count();
        prop_assert_eq!(visible.len(), expected);
    }
}
