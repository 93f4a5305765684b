//! Derived view filter: substring search over designated fields.
//!
//! Each list page filters its collection by a free-text query. Matching is
//! case-insensitive substring over a fixed set of fields per entity type,
//! result order equals input order, and the empty query is the identity.
//! The query is deliberately not trimmed: whitespace matches literally.

use crate::entities::{Agent, Patient, Site, Trial};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// The designated fields searched for this entity type.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Trial {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.id.as_str()]
    }
}

impl Searchable for Site {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location]
    }
}

impl Searchable for Agent {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.id.as_str()]
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.subject_id, &self.site, self.trial.as_str()]
    }
}

/// Return the records whose designated fields contain `query` as a
/// case-insensitive substring, preserving input order.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Named(String);

    impl Searchable for Named {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.0]
        }
    }

    fn arb_named() -> impl Strategy<Value = Named> {
        "[a-zA-Z0-9 ]{0,12}".prop_map(Named)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The result is a subsequence of the input: order preserved, no
        /// invented records.
        #[test]
        fn prop_filter_is_order_preserving_subsequence(
            items in prop::collection::vec(arb_named(), 0..20),
            query in "[a-zA-Z0-9 ]{0,6}",
        ) {
            let filtered = filter_by_query(&items, &query);
            let mut cursor = 0usize;
            for kept in filtered {
                let pos = items[cursor..]
                    .iter()
                    .position(|item| std::ptr::eq(item, kept));
                prop_assert!(pos.is_some());
                cursor += pos.unwrap() + 1;
            }
        }

        /// Exact membership: a record is kept iff a designated field
        /// contains the query case-insensitively.
        #[test]
        fn prop_filter_membership(
            items in prop::collection::vec(arb_named(), 0..20),
            query in "[a-zA-Z0-9 ]{1,6}",
        ) {
            let filtered = filter_by_query(&items, &query);
            let needle = query.to_lowercase();
            for item in &items {
                let matches = item.0.to_lowercase().contains(&needle);
                let kept = filtered.iter().any(|kept| std::ptr::eq(*kept, item));
                prop_assert_eq!(matches, kept);
            }
        }

        /// The empty query keeps everything.
        #[test]
        fn prop_empty_query_is_identity(items in prop::collection::vec(arb_named(), 0..20)) {
            prop_assert_eq!(filter_by_query(&items, "").len(), items.len());
        }
    }
}
