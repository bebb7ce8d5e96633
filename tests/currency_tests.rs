use planner_core::{
    currency::{
        format_amount, from_reference, rate_for, symbol_for, to_reference, ExchangeRate,
        REFERENCE_CURRENCY,
    },
    state::BudgetState,
};

fn sample_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate::new("Dollar", "$", "USD", 1.1),
        ExchangeRate::new("Pound", "£", "GBP", 0.86),
        ExchangeRate {
            code: None,
            name: "Lei (RON)".into(),
            symbol: "RON".into(),
            rate: 4.97,
        },
        ExchangeRate {
            code: None,
            name: "Mystery".into(),
            symbol: "?".into(),
            rate: 2.0,
        },
    ]
}

#[test]
fn reference_currency_always_rates_one() {
    assert_eq!(rate_for(&sample_rates(), REFERENCE_CURRENCY), Some(1.0));
    assert_eq!(rate_for(&[], REFERENCE_CURRENCY), Some(1.0));
}

#[test]
fn rate_resolves_explicit_and_labelled_codes() {
    let rates = sample_rates();
    assert_eq!(rate_for(&rates, "USD"), Some(1.1));
    assert_eq!(rate_for(&rates, "RON"), Some(4.97));
    assert_eq!(rate_for(&rates, "JPY"), None);
}

#[test]
fn unresolvable_entries_are_not_selectable() {
    let mut state = BudgetState::seed();
    state.rate_table = sample_rates();
    let codes = state.selectable_codes();
    assert_eq!(codes, vec![REFERENCE_CURRENCY, "USD", "GBP", "RON"]);
}

#[test]
fn symbol_falls_back_to_code() {
    let rates = sample_rates();
    assert_eq!(symbol_for(&rates, "USD"), "$");
    assert_eq!(symbol_for(&rates, "JPY"), "JPY");
    assert_eq!(symbol_for(&rates, REFERENCE_CURRENCY), REFERENCE_CURRENCY);
}

#[test]
fn conversion_round_trips_for_known_codes() {
    let rates = sample_rates();
    for code in ["USD", "GBP", "RON", REFERENCE_CURRENCY] {
        let through = from_reference(&rates, to_reference(&rates, 123.45, code), code);
        assert!(
            (through - 123.45).abs() < 1e-9,
            "round trip drifted for {code}: {through}"
        );
    }
}

#[test]
fn unknown_code_degrades_to_identity() {
    let rates = sample_rates();
    assert_eq!(to_reference(&rates, 42.0, "JPY"), 42.0);
    assert_eq!(from_reference(&rates, 42.0, "JPY"), 42.0);
}

#[test]
fn zero_rate_degrades_to_identity() {
    let rates = vec![ExchangeRate::new("Broken", "?", "ZRO", 0.0)];
    assert_eq!(to_reference(&rates, 42.0, "ZRO"), 42.0);
}

#[test]
fn amounts_format_with_two_decimals_and_grouping() {
    assert_eq!(format_amount(220.0), "220.00");
    assert_eq!(format_amount(1040.5), "1,040.50");
    assert_eq!(format_amount(1234567.891), "1,234,567.89");
    assert_eq!(format_amount(-1234.5), "-1,234.50");
    assert_eq!(format_amount(0.0), "0.00");
}
