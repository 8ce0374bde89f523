//! Pure card helpers used by the bots.

use std::cmp::Ordering;

use super::entities::Card;

fn compare_cards(first: &Card, second: &Card) -> Ordering {
    first
        .0
        .cmp(&second.0)
        .then_with(|| first.1.short_name().cmp(second.1.short_name()))
}

/// Sort cards by ascending value, breaking ties by the suit's short name so
/// that any input ends up in the same order.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by(compare_cards);
}

/// Return whether at least two of the cards share a value.
///
/// The cards are sorted in a private copy, so the caller's ordering is left
/// untouched. After sorting, equal values are neighbours and a single scan
/// over adjacent cards is enough.
pub fn has_pair(cards: &[Card]) -> bool {
    let mut sorted = cards.to_vec();
    sort_cards(&mut sorted);
    sorted.windows(2).any(|pair| pair[0].0 == pair[1].0)
}
