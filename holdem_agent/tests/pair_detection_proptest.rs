/// Property-based tests for pair detection using proptest
///
/// These tests check `has_pair` against a straightforward count of values
/// over a wide range of randomly generated card combinations.
use holdem_agent::game::{
    entities::{Card, Suit},
    functional::{has_pair, sort_cards},
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn suit_strategy() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Club),
        Just(Suit::Diamond),
        Just(Suit::Heart),
        Just(Suit::Spade),
    ]
}

// Strategy to generate a valid card (values 2-14, aces are value 14)
fn card_strategy() -> impl Strategy<Value = Card> {
    (2u8..=14, suit_strategy()).prop_map(|(value, suit)| Card(value, suit))
}

// Strategy to generate a vec of unique cards (no duplicates)
fn unique_cards_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), min..=max).prop_filter("Cards must be unique", |cards| {
        let set: BTreeSet<_> = cards.iter().collect();
        set.len() == cards.len()
    })
}

// Strategy to generate cards whose values are all different
fn distinct_values_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence((2u8..=14).collect::<Vec<_>>(), 0..=7)
        .prop_flat_map(|values| {
            let len = values.len();
            (
                Just(values),
                prop::collection::vec(suit_strategy(), len),
            )
        })
        .prop_map(|(values, suits)| {
            values
                .into_iter()
                .zip(suits)
                .map(|(value, suit)| Card(value, suit))
                .collect()
        })
        .prop_shuffle()
}

fn value_repeats(cards: &[Card]) -> bool {
    let mut counts: HashMap<u8, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.0).or_default() += 1;
    }
    counts.values().any(|&count| count >= 2)
}

proptest! {
    #[test]
    fn test_has_pair_matches_value_count(cards in unique_cards_strategy(0, 7)) {
        prop_assert_eq!(has_pair(&cards), value_repeats(&cards));
    }

    #[test]
    fn test_distinct_values_never_pair(cards in distinct_values_strategy()) {
        prop_assert!(!has_pair(&cards), "no value repeats in {:?}", cards);
    }

    #[test]
    fn test_duplicated_value_always_pairs(
        cards in distinct_values_strategy(),
        pick in any::<prop::sample::Index>(),
        suit in suit_strategy(),
    ) {
        prop_assume!(!cards.is_empty());
        let mut cards = cards;
        let twin = Card(cards[pick.index(cards.len())].0, suit);
        cards.push(twin);
        prop_assert!(has_pair(&cards), "{:?} repeats a value", cards);
    }

    #[test]
    fn test_has_pair_ignores_input_order(cards in unique_cards_strategy(0, 7)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(has_pair(&cards), has_pair(&reversed));
    }

    #[test]
    fn test_sort_cards_is_deterministic(cards in unique_cards_strategy(0, 7)) {
        let mut sorted = cards.clone();
        sort_cards(&mut sorted);
        let mut reversed = cards;
        reversed.reverse();
        sort_cards(&mut reversed);

        prop_assert_eq!(&sorted, &reversed);
        prop_assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}

#[test]
fn test_pair_at_front_of_sorted_cards() {
    // The pair is the first adjacent comparison after sorting.
    let cards = [
        Card(2, Suit::Club),
        Card(2, Suit::Diamond),
        Card(5, Suit::Spade),
    ];
    assert!(has_pair(&cards));
}
