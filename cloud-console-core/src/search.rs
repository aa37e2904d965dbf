//! Text search over resource collections
//!
//! Every console page filters its collection the same way: a single query
//! string matched case-insensitively against a handful of designated text
//! fields. The pipeline is one linear pass, keeps the original record
//! order, and never mutates the collection.

/// A record the search box can match against.
pub trait Searchable {
    /// Field values the query is matched against, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    /// True when `query` matches this record.
    ///
    /// The empty query matches every record. This is an explicit base case,
    /// not a side effect of substring containment: whitespace-only queries
    /// are matched literally, without trimming.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records of `collection` matching `query`, preserving collection order.
#[must_use]
pub fn filter_view<'a, T: Searchable>(collection: &'a [T], query: &str) -> Vec<&'a T> {
    collection.iter().filter(|r| r.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory;

    #[test]
    fn empty_query_returns_the_whole_collection_in_order() {
        let users = inventory::users();
        let view = filter_view(&users, "");
        assert_eq!(view.len(), users.len());
        for (shown, original) in view.iter().zip(users.iter()) {
            assert_eq!(shown.id, original.id);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let users = inventory::users();
        assert_eq!(filter_view(&users, "SARAH").len(), 1);
        assert_eq!(filter_view(&users, "sarah").len(), 1);
    }

    #[test]
    fn every_match_contains_the_query_in_a_designated_field() {
        let instances = inventory::instances();
        let view = filter_view(&instances, "server");
        assert!(!view.is_empty());
        for record in view {
            assert!(record
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("server")));
        }
    }

    #[test]
    fn view_is_an_order_preserving_subsequence() {
        let networks = inventory::networks();
        let view = filter_view(&networks, "net");
        let mut cursor = 0;
        for shown in view {
            let pos = networks[cursor..]
                .iter()
                .position(|n| n.id == shown.id)
                .expect("filtered record must come from the collection");
            cursor += pos + 1;
        }
    }

    #[test]
    fn narrowing_the_query_narrows_the_view() {
        let volumes = inventory::volumes();
        let broad = filter_view(&volumes, "storage");
        let narrow = filter_view(&volumes, "storagezzz");
        assert!(narrow.is_empty());
        assert!(narrow.len() <= broad.len());
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let users = inventory::users();
        // No user field contains a double space.
        assert!(filter_view(&users, "  ").is_empty());
        // Single spaces occur inside full names.
        assert!(!filter_view(&users, " ").is_empty());
    }

    #[test]
    fn user_lookup_end_to_end() {
        let users = inventory::users();
        assert_eq!(users.len(), 5);

        let hit = filter_view(&users, "chen");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].email, "sarah.chen@company.com");

        assert_eq!(filter_view(&users, "").len(), 5);
        assert!(filter_view(&users, "zzz").is_empty());
    }
}
