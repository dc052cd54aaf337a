use std::collections::HashSet;

use gto_advisor::cards::*;
use gto_advisor::error::GtoError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.value(), 14);
}

#[test]
fn test_invalid_rank() {
    assert!(matches!(Rank::from_char('X'), Err(GtoError::InvalidRank('X'))));
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::from_char('x').is_err());
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.pretty(), "A\u{2660}");
}

#[test]
fn test_card_ordering() {
    let two = Card::new(Rank::Two, Suit::Spades);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert!(two < ace);
    let king = Card::new(Rank::King, Suit::Hearts);
    let queen = Card::new(Rank::Queen, Suit::Diamonds);
    assert!(!(king < queen));
}

#[test]
fn test_card_identity_is_rank_and_suit() {
    let a1 = Card::new(Rank::Ace, Suit::Spades);
    let a2 = Card::new(Rank::Ace, Suit::Spades);
    let a3 = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);

    let mut s = HashSet::new();
    s.insert(a1);
    s.insert(a2);
    s.insert(a3);
    assert_eq!(s.len(), 2);
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("As").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(parse_card("td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!("AH".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
}

#[test]
fn test_parse_card_invalid() {
    assert!(parse_card("ABC").is_err());
    assert!(parse_card("1s").is_err());
}

#[test]
fn test_parse_board_variants() {
    assert_eq!(parse_board("AsKdQh").unwrap().len(), 3);
    assert_eq!(parse_board("As Kd Qh 5c").unwrap().len(), 4);
    assert_eq!(parse_board("As,Kd,Qh,5c,2s").unwrap().len(), 5);
    assert!(parse_board("").unwrap().is_empty());
    assert!(matches!(
        parse_board("AsK"),
        Err(GtoError::InvalidBoardNotation(_))
    ));
}

#[test]
fn test_parse_hole_cards() {
    let [a, b] = parse_hole_cards("AhKs").unwrap();
    assert_eq!(a, Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(b, Card::new(Rank::King, Suit::Spades));
    assert!(parse_hole_cards("AhKsQd").is_err());
    assert!(matches!(
        parse_hole_cards("AhAh"),
        Err(GtoError::DuplicateCard(_))
    ));
}

#[test]
fn test_remaining_deck_excludes_used() {
    let used = parse_board("AsKhQd").unwrap();
    let deck = build_remaining_deck(&used);
    assert_eq!(deck.len(), 49);
    assert!(used.iter().all(|c| !deck.contains(c)));
    assert_eq!(build_remaining_deck(&[]).len(), 52);
}

#[test]
fn test_deck_deal_returns_new_view() {
    let deck = Deck::without(&[]);
    let (dealt, rest) = deck.deal(5).unwrap();
    assert_eq!(dealt.len(), 5);
    assert_eq!(rest.len(), 47);
    assert_eq!(deck.len(), 52);
    assert!(dealt.iter().all(|c| !rest.cards().contains(c)));
}

#[test]
fn test_deck_deal_too_many() {
    let deck = Deck::without(&parse_board("AsKs").unwrap());
    assert!(matches!(
        deck.deal(51),
        Err(GtoError::NotEnoughDeck {
            requested: 51,
            available: 50
        })
    ));
}

#[test]
fn test_deck_shuffled_is_permutation() {
    let mut rng = StdRng::seed_from_u64(42);
    let deck = Deck::without(&parse_board("2c3c").unwrap());
    let shuffled = deck.shuffled(&mut rng);
    assert_eq!(shuffled.len(), 50);
    let a: HashSet<Card> = deck.cards().iter().copied().collect();
    let b: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(a, b);
}

#[test]
fn test_shuffle_is_reproducible_with_seed() {
    let deck = full_deck();
    let a = shuffle(&deck, &mut StdRng::seed_from_u64(9));
    let b = shuffle(&deck, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn test_find_duplicate() {
    let cards = parse_board("AsKdAs").unwrap();
    assert_eq!(find_duplicate(&cards), Some(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!(find_duplicate(&parse_board("AsKd").unwrap()), None);
}

#[test]
fn test_simplify_hand() {
    assert_eq!(simplify_hand(&parse_board("AsAh").unwrap()).unwrap(), "AA");
    assert_eq!(simplify_hand(&parse_board("KsAs").unwrap()).unwrap(), "AKs");
    assert_eq!(simplify_hand(&parse_board("9hTd").unwrap()).unwrap(), "T9o");
    assert!(simplify_hand(&parse_board("As").unwrap()).is_err());
}

#[test]
fn test_card_serde_as_notation() {
    let card = Card::new(Rank::Queen, Suit::Clubs);
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, "\"Qc\"");
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
    assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
}
