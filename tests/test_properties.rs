//! Randomized checks over many seeded hands.

use std::collections::HashSet;

use gto_advisor::best_hand::*;
use gto_advisor::cards::*;
use gto_advisor::hand_evaluator::*;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_hand(rng: &mut StdRng, n: usize) -> Vec<Card> {
    shuffle(&full_deck(), rng).into_iter().take(n).collect()
}

#[test]
fn test_direct_evaluation_equals_best_subset() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..3_000 {
        let n = rng.gen_range(5..=7);
        let hand = random_hand(&mut rng, n);
        let direct = evaluate_hand(&hand).unwrap();
        let subset_max = hand
            .iter()
            .copied()
            .combinations(5)
            .map(|five| evaluate_hand(&five).unwrap().score)
            .max()
            .unwrap();
        assert_eq!(direct.score, subset_max, "{:?}", hand);
    }
}

#[test]
fn test_best_hand_is_optimal_for_seven_cards() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..1_000 {
        let hand = random_hand(&mut rng, 7);
        let best = get_best_hand(&hand);
        assert_eq!(best.len(), 5);
        assert!(best.iter().all(|c| hand.contains(c)));
        let best_score = evaluate_hand(&best).unwrap().score;
        let max = hand
            .iter()
            .copied()
            .combinations(5)
            .map(|five| evaluate_hand(&five).unwrap().score)
            .max()
            .unwrap();
        assert_eq!(best_score, max);
    }
}

#[test]
fn test_category_dominance() {
    let mut rng = StdRng::seed_from_u64(99);
    let hands: Vec<EvaluatedHand> = (0..4_000)
        .map(|_| {
            let n = rng.gen_range(5..=7);
            evaluate_hand(&random_hand(&mut rng, n)).unwrap()
        })
        .collect();

    let categories: HashSet<HandCategory> = hands.iter().map(|h| h.category).collect();
    assert!(categories.len() >= 7, "sample too narrow: {:?}", categories);

    for h in &hands {
        let base = h.category as u32 * CATEGORY_BAND;
        assert!(h.score >= base && h.score < base + CATEGORY_BAND, "{:?}", h);
    }
    for (a, b) in hands.iter().tuple_windows() {
        if a.category > b.category {
            assert!(a.score > b.score, "{:?} vs {:?}", a, b);
        } else if a.category < b.category {
            assert!(a.score < b.score, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_score_is_invariant_under_suit_relabelling() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let hand = random_hand(&mut rng, 7);
        let scored = evaluate_hand(&hand).unwrap();
        // Rotating every suit keeps ranks and suitedness, so the score must not move.
        let rotated: Vec<Card> = hand
            .iter()
            .map(|c| Card::new(c.rank, ALL_SUITS[(c.suit.index() + 1) % 4]))
            .collect();
        assert_eq!(evaluate_hand(&rotated).unwrap().score, scored.score);
    }
}
