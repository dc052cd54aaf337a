use std::collections::HashSet;

use gto_advisor::cards::*;
use gto_advisor::ranges::*;
use gto_advisor::strategy::Position;

#[test]
fn test_169_starting_hands() {
    let hands = generate_starting_hands();
    assert_eq!(hands.len(), 169);
    let unique: HashSet<&String> = hands.iter().collect();
    assert_eq!(unique.len(), 169);
    assert_eq!(hands[0], "AA");
    assert_eq!(hands[12], "22");
    assert_eq!(hands[13], "AKs");
    assert_eq!(hands.last().unwrap(), "32o");
}

#[test]
fn test_starting_hands_cover_every_combo() {
    let total: u32 = generate_starting_hands().iter().map(|h| combo_count(h)).sum();
    assert_eq!(total, 1326);
}

#[test]
fn test_combo_count() {
    assert_eq!(combo_count("AA"), 6);
    assert_eq!(combo_count("AKs"), 4);
    assert_eq!(combo_count("AKo"), 12);
    assert_eq!(combo_count("AK"), 0);
}

#[test]
fn test_hand_tiers() {
    assert_eq!(hand_tier("AA"), HandTier::Premium);
    assert_eq!(hand_tier("AKo"), HandTier::Strong);
    assert_eq!(hand_tier("KQo"), HandTier::Medium);
    assert_eq!(hand_tier("A5s"), HandTier::Playable);
    assert_eq!(hand_tier("76s"), HandTier::Speculative);
    assert_eq!(hand_tier("72o"), HandTier::Weak);
    assert!(HandTier::Premium > HandTier::Strong);
}

#[test]
fn test_tier_of_cards() {
    let cards = parse_board("KsAs").unwrap();
    assert_eq!(tier_of(&cards).unwrap(), HandTier::Premium);
    assert!(tier_of(&parse_board("As").unwrap()).is_err());
}

#[test]
fn test_default_ranges_widen_with_position() {
    let utg = range_combos(default_range(Position::UTG));
    let mp = range_combos(default_range(Position::MP));
    let co = range_combos(default_range(Position::CO));
    let btn = range_combos(default_range(Position::BTN));
    assert!(utg < mp && mp < co && co < btn);
}

#[test]
fn test_default_ranges_use_valid_classes() {
    let all: HashSet<String> = generate_starting_hands().into_iter().collect();
    for position in Position::ALL {
        for hand in default_range(position) {
            assert!(all.contains(*hand), "{} in {}", hand, position);
        }
    }
}

#[test]
fn test_in_default_range() {
    assert!(in_default_range(Position::BTN, "K2s"));
    assert!(!in_default_range(Position::UTG, "K2s"));
    assert!(in_default_range(Position::UTG, "AA"));
}
