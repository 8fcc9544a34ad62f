use proptest::prelude::*;
use receipt_processor::{score, score_breakdown, LineItem, Receipt, ScoreError};

fn price() -> impl Strategy<Value = String> {
    (0u32..10_000, 0u32..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// 含超大金额、科学计数法与乱码
fn hostile_price() -> impl Strategy<Value = String> {
    prop_oneof![
        price(),
        "[0-9]{1,40}(\\.[0-9]{1,12})?",
        "-?[0-9]{1,4}[eE][+-]?[0-9]{1,20}",
        "[0-9]{1,3}\\.[0-9]{1,3}[eE][0-9]{1,9}",
        ".{0,16}",
    ]
}

fn line_item() -> impl Strategy<Value = LineItem> {
    ("[ a-zA-Z0-9-]{0,24}", price()).prop_map(|(d, p)| LineItem::new(d, p))
}

fn receipt() -> impl Strategy<Value = Receipt> {
    (
        "[ a-zA-Z0-9&'-]{0,20}",
        1u32..=28,
        0u32..24,
        0u32..60,
        prop::collection::vec(line_item(), 0..12),
    )
        .prop_map(|(retailer, day, hour, minute, items)| Receipt {
            retailer,
            purchase_date: format!("2022-02-{day:02}"),
            purchase_time: format!("{hour:02}:{minute:02}"),
            total: "0.00".to_string(),
            items,
        })
}

fn hostile_receipt() -> impl Strategy<Value = Receipt> {
    (
        receipt(),
        prop::collection::vec(("[ a-zA-Z]{0,9}", hostile_price()), 0..40),
    )
        .prop_map(|(mut r, items)| {
            r.items = items.into_iter().map(|(d, p)| LineItem::new(d, p)).collect();
            r
        })
}

proptest! {
    #[test]
    fn scoring_is_deterministic(r in receipt()) {
        prop_assert_eq!(score(&r), score(&r));
    }

    #[test]
    fn score_is_sum_of_breakdown(r in receipt()) {
        let b = score_breakdown(&r).unwrap();
        prop_assert_eq!(score(&r).unwrap(), b.total());
        prop_assert!(b.total() >= 0);
    }

    #[test]
    fn pair_rule_truncates(r in receipt()) {
        let b = score_breakdown(&r).unwrap();
        prop_assert_eq!(b.item_pairs, (r.items.len() / 2) as i64 * 5);
    }

    #[test]
    fn whole_dollar_implies_quarter(r in receipt()) {
        let b = score_breakdown(&r).unwrap();
        if b.round_dollar > 0 {
            prop_assert_eq!(b.quarter_multiple, 25);
        }
    }

    #[test]
    fn window_matches_closed_interval(hour in 0u32..24, minute in 0u32..60) {
        let r = Receipt {
            retailer: String::new(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: format!("{hour:02}:{minute:02}"),
            total: "0.00".to_string(),
            items: vec![],
        };
        let expected = if (14..16).contains(&hour) || (hour == 16 && minute == 0) { 10 } else { 0 };
        prop_assert_eq!(score_breakdown(&r).unwrap().afternoon, expected);
    }

    #[test]
    fn non_clock_times_are_rejected(time in "[a-z]{1,5}") {
        let r = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: time.clone(),
            total: "0.00".to_string(),
            items: vec![],
        };
        prop_assert_eq!(score(&r), Err(ScoreError::InvalidTimeFormat { value: time }));
    }

    #[test]
    fn hostile_prices_never_break_scoring(r in hostile_receipt()) {
        let b = score_breakdown(&r).unwrap();
        prop_assert!(b.descriptions >= 0);
        prop_assert!(b.total() >= 0);
        prop_assert_eq!(score(&r).unwrap(), b.total());
    }

    #[test]
    fn exponent_prices_add_nothing(exp in 0u32..100_000_000) {
        let r = Receipt {
            retailer: String::new(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "10:00".to_string(),
            total: "0.00".to_string(),
            items: vec![LineItem::new("abc", format!("1e{exp}")), LineItem::new("ab", "1.10")],
        };
        let b = score_breakdown(&r).unwrap();
        prop_assert_eq!(b.descriptions, 0);
        prop_assert_eq!(b.quarter_multiple, 0);
        prop_assert_eq!(b.round_dollar, 0);
    }
}
