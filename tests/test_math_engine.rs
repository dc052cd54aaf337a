use approx::assert_abs_diff_eq;
use gto_advisor::math_engine::*;

#[test]
fn test_pot_odds_basic() {
    assert_abs_diff_eq!(pot_odds(100.0, 50.0), 1.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_pot_odds_full_pot() {
    assert_abs_diff_eq!(pot_odds(100.0, 100.0), 0.5, epsilon = 1e-9);
}

#[test]
fn test_pot_odds_no_bet() {
    assert_eq!(pot_odds(100.0, 0.0), 0.0);
}

#[test]
fn test_pot_odds_guarded_when_empty() {
    let odds = pot_odds(0.0, 0.0);
    assert_eq!(odds, 0.0);
    assert!(odds.is_finite());
}

#[test]
fn test_mdf_complements_pot_odds() {
    assert_abs_diff_eq!(mdf(100.0, 50.0) + pot_odds(100.0, 50.0), 1.0, epsilon = 1e-12);
    assert_eq!(mdf(0.0, 0.0), 1.0);
}

#[test]
fn test_aggressive_ev() {
    assert_abs_diff_eq!(aggressive_ev(0.5, 100.0, 50.0), 25.0, epsilon = 1e-9);
    assert!(aggressive_ev(0.1, 100.0, 300.0) < 0.0);
}

#[test]
fn test_passive_ev_risks_half_the_bet() {
    assert_abs_diff_eq!(passive_ev(0.5, 100.0, 50.0), 37.5, epsilon = 1e-9);
    assert!(passive_ev(0.4, 100.0, 80.0) > aggressive_ev(0.4, 100.0, 80.0));
}

#[test]
fn test_ev_with_no_bet_is_pot_share() {
    assert_abs_diff_eq!(aggressive_ev(0.3, 100.0, 0.0), 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(passive_ev(0.3, 100.0, 0.0), 30.0, epsilon = 1e-9);
}

#[test]
fn test_spr_zones() {
    assert_eq!(spr(300.0, 100.0).unwrap().zone, SprZone::Low);
    assert_eq!(spr(800.0, 100.0).unwrap().zone, SprZone::Medium);
    assert_eq!(spr(1000.0, 75.0).unwrap().zone, SprZone::High);
    assert!(spr(100.0, 0.0).is_err());
}

#[test]
fn test_spr_display() {
    let s = spr(1000.0, 100.0).unwrap();
    assert_eq!(s.to_string(), "SPR 10.0 (medium)");
}
