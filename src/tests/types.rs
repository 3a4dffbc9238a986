//! Tests for the core domain enums.

use std::str::FromStr;

use crate::{CardCategory, CardsPerRow, Density, RowCount, Trend};

#[test]
fn category_display_and_parse_round_trip() {
    for category in [
        CardCategory::Membership,
        CardCategory::Attendance,
        CardCategory::Giving,
        CardCategory::Engagement,
        CardCategory::Events,
    ] {
        let text = category.to_string();
        assert_eq!(CardCategory::from_str(&text).expect("round trip"), category);
    }
}

#[test]
fn category_parse_is_case_insensitive() {
    assert_eq!(
        CardCategory::from_str("GIVING").expect("parse"),
        CardCategory::Giving
    );
}

#[test]
fn category_parse_rejects_unknown() {
    let err = CardCategory::from_str("finance").expect_err("unknown category");
    assert!(err.to_string().contains("finance"));
}

#[test]
fn density_cycle_visits_all_presets() {
    let start = Density::Compact;
    let mut seen = vec![start];
    let mut current = start;
    for _ in 0..2 {
        current = current.cycle();
        seen.push(current);
    }
    assert_eq!(
        seen,
        vec![Density::Compact, Density::Standard, Density::Comfortable]
    );
    assert_eq!(current.cycle(), start, "cycle wraps around");
}

#[test]
fn row_count_toggle_flips() {
    assert_eq!(RowCount::One.toggle(), RowCount::Two);
    assert_eq!(RowCount::Two.toggle(), RowCount::One);
}

#[test]
fn cards_per_row_counts() {
    assert_eq!(CardsPerRow::Two.count(), 2);
    assert_eq!(CardsPerRow::Three.count(), 3);
    assert_eq!(CardsPerRow::Four.count(), 4);
}

#[test]
fn cards_per_row_try_from_rejects_out_of_range() {
    for value in [0u8, 1, 5, 255] {
        let err = CardsPerRow::try_from(value).expect_err("out of range");
        assert!(err.to_string().contains("cardsPerRow"));
    }
    assert_eq!(CardsPerRow::try_from(3).expect("in range"), CardsPerRow::Three);
}

#[test]
fn row_count_try_from_rejects_out_of_range() {
    for value in [0u8, 3, 200] {
        assert!(RowCount::try_from(value).is_err());
    }
    assert_eq!(RowCount::try_from(1).expect("in range"), RowCount::One);
}

#[test]
fn trend_arrows() {
    assert_eq!(Trend::Up.arrow(), "▲");
    assert_eq!(Trend::Down.arrow(), "▼");
    assert_eq!(Trend::Flat.arrow(), "→");
}
