//! Free-text card search.

use super::definition::Card;

/// Cards whose name contains `query`, ignoring case, in input order.
///
/// An empty query matches every card. Stateless; callers rerun it on every
/// query change.
pub fn search<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| card.name_contains_lower(&needle))
        .collect()
}
