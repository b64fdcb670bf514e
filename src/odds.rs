//! Odds conversion and payout arithmetic.
//!
//! Everything in here is pure: same inputs, same outputs, no storage, no DOM.
//! The calculator, glossary, and bet slip simulator all price through this one
//! module so validation cannot drift between views.

use std::fmt;

use thiserror::Error;

/// The three price notations the app understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OddsFormat {
    American,
    Decimal,
    Fractional,
}

impl OddsFormat {
    pub fn all() -> &'static [Self] {
        &[Self::American, Self::Decimal, Self::Fractional]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::American => "American",
            Self::Decimal => "Decimal",
            Self::Fractional => "Fractional",
        }
    }

    /// Select-box caption with sample prices.
    pub fn caption(self) -> &'static str {
        match self {
            Self::American => "American (-110, +150)",
            Self::Decimal => "Decimal (1.91, 2.50)",
            Self::Fractional => "Fractional (10/11, 3/2)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::American => "e.g., -110",
            Self::Decimal => "e.g., 1.91",
            Self::Fractional => "e.g., 10/11",
        }
    }

    /// Shown under the odds input while the current text does not parse.
    pub fn example(self) -> &'static str {
        match self {
            Self::American => "-110 or +150",
            Self::Decimal => "1.91",
            Self::Fractional => "10/11",
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a calculation produced no result. Bad user input is a value here,
/// never a panic, and never propagates past the calling view.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputError {
    #[error("odds do not match the {0} format")]
    InvalidOdds(OddsFormat),
    #[error("stake must be a positive number")]
    InvalidStake,
}

/// A betting price in exactly one notation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Odds {
    /// Signed whole-number price, never zero. Positive is the profit on a
    /// $100 stake, negative is the stake needed to profit $100.
    American(i64),
    /// Total return multiple per unit staked, stake included. Always > 1.0.
    Decimal(f64),
    /// Profit ratio numerator/denominator, stake excluded. Both > 0.
    Fractional(u64, u64),
}

impl Odds {
    /// Strict parse of user text in the given notation.
    ///
    /// American: optional single sign then digits, value nonzero ("0", "+0"
    /// and "-0" are ambiguous and rejected; "+100" and "-100" are valid and
    /// price even money). Decimal: unsigned decimal literal, strictly above
    /// 1.0. Fractional: digits '/' digits, both sides nonzero. Anything else
    /// is rejected.
    pub fn parse(raw: &str, format: OddsFormat) -> Result<Self, InputError> {
        let raw = raw.trim();
        let invalid = InputError::InvalidOdds(format);
        match format {
            OddsFormat::American => {
                let digits = raw
                    .strip_prefix('+')
                    .or_else(|| raw.strip_prefix('-'))
                    .unwrap_or(raw);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid);
                }
                let value: i64 = raw.parse().map_err(|_| invalid)?;
                if value == 0 {
                    return Err(invalid);
                }
                Ok(Self::American(value))
            }
            OddsFormat::Decimal => {
                if !is_decimal_literal(raw) {
                    return Err(invalid);
                }
                let value: f64 = raw.parse().map_err(|_| invalid)?;
                if !value.is_finite() || value <= 1.0 {
                    return Err(invalid);
                }
                Ok(Self::Decimal(value))
            }
            OddsFormat::Fractional => {
                let (num, den) = raw.split_once('/').ok_or(invalid)?;
                if num.is_empty()
                    || den.is_empty()
                    || !num.bytes().all(|b| b.is_ascii_digit())
                    || !den.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(invalid);
                }
                let num: u64 = num.parse().map_err(|_| invalid)?;
                let den: u64 = den.parse().map_err(|_| invalid)?;
                if num == 0 || den == 0 {
                    return Err(invalid);
                }
                Ok(Self::Fractional(num, den))
            }
        }
    }

    /// Break-even win probability implied by the price, strictly inside
    /// (0, 1) for every representable value.
    pub fn implied_probability(self) -> f64 {
        match self {
            Self::American(n) if n > 0 => 100.0 / (n as f64 + 100.0),
            Self::American(n) => {
                let n = n.unsigned_abs() as f64;
                n / (n + 100.0)
            }
            Self::Decimal(d) => 1.0 / d,
            Self::Fractional(num, den) => den as f64 / (num as f64 + den as f64),
        }
    }

    /// Total returned on a win, stake included. Strictly exceeds the stake.
    /// This prices the winning outcome only; the loss branch belongs to the
    /// caller.
    pub fn payout(self, stake: Stake) -> f64 {
        let s = stake.amount();
        match self {
            Self::American(n) if n > 0 => (n as f64 / 100.0) * s + s,
            Self::American(n) => (100.0 / n.unsigned_abs() as f64) * s + s,
            Self::Decimal(d) => d * s,
            Self::Fractional(num, den) => (num as f64 / den as f64) * s + s,
        }
    }

    /// The same price as a decimal multiple, for rendering in the other
    /// notations. Always > 1.0.
    pub fn to_decimal(self) -> f64 {
        match self {
            Self::American(n) if n > 0 => 1.0 + n as f64 / 100.0,
            Self::American(n) => 1.0 + 100.0 / n.unsigned_abs() as f64,
            Self::Decimal(d) => d,
            Self::Fractional(num, den) => 1.0 + num as f64 / den as f64,
        }
    }
}

// Unsigned decimal literal: digits, or digits? '.' digits. No sign, no
// exponent.
fn is_decimal_literal(s: &str) -> bool {
    match s.split_once('.') {
        None => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        Some((whole, frac)) => {
            whole.bytes().all(|b| b.is_ascii_digit())
                && !frac.is_empty()
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// A wager amount. Finite and strictly positive by construction; anything
/// else is rejected rather than clamped.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Stake(f64);

impl Stake {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let value: f64 = raw.trim().parse().map_err(|_| InputError::InvalidStake)?;
        if !value.is_finite() || value <= 0.0 {
            return Err(InputError::InvalidStake);
        }
        Ok(Self(value))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

/// One conversion outcome. Built fresh per call and replaced wholesale; the
/// caller owns display formatting.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Calculation {
    /// Implied win probability as a percentage, in (0, 100).
    pub implied_probability_pct: f64,
    /// Total returned on a win, stake included.
    pub potential_payout: f64,
}

/// Parse and price in one step. Invalid odds or a non-positive stake short
/// circuit to an error so the caller clears any stale result.
pub fn calculate(
    format: OddsFormat,
    odds_raw: &str,
    stake_raw: &str,
) -> Result<Calculation, InputError> {
    let odds = Odds::parse(odds_raw, format)?;
    let stake = Stake::parse(stake_raw)?;
    Ok(Calculation {
        implied_probability_pct: odds.implied_probability() * 100.0,
        potential_payout: odds.payout(stake),
    })
}

/// Grammar and constraint check without building a value. The calculator
/// uses this for the inline hint while the user is still typing.
pub fn validate(raw: &str, format: OddsFormat) -> bool {
    Odds::parse(raw, format).is_ok()
}

pub fn format_decimal(d: f64) -> String {
    format!("{d:.2}")
}

// d must exceed 1.0; every Odds::to_decimal result does.
pub fn format_american(d: f64) -> String {
    let profit = d - 1.0;
    if d >= 2.0 {
        format!("+{}", (profit * 100.0).round() as i64)
    } else {
        format!("-{}", (100.0 / profit).round() as i64)
    }
}

pub fn format_fractional(d: f64) -> String {
    let (num, den) = approximate_ratio(d - 1.0, 1_000);
    format!("{num}/{den}")
}

// Continued-fraction approximation of x, denominator capped at max_den.
fn approximate_ratio(x: f64, max_den: i64) -> (i64, i64) {
    let mut x = x;
    let mut a = x.floor();
    let (mut h0, mut k0): (i64, i64) = (1, 0);
    let (mut h1, mut k1): (i64, i64) = (a as i64, 1);
    for _ in 0..100 {
        let frac = x - a;
        if frac.abs() < 1e-9 {
            break;
        }
        x = 1.0 / frac;
        a = x.floor();
        let h2 = h0 + (a as i64) * h1;
        let k2 = k0 + (a as i64) * k1;
        if k2 > max_den {
            break;
        }
        h0 = h1;
        k0 = k1;
        h1 = h2;
        k1 = k2;
    }
    (h1, k1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(format: OddsFormat, odds: &str, stake: &str) -> Calculation {
        calculate(format, odds, stake).expect("inputs are valid")
    }

    fn cents(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn favorite_moneyline() {
        let c = calc(OddsFormat::American, "-150", "100");
        assert_eq!(cents(c.potential_payout), 166.67);
        assert_eq!(cents(c.implied_probability_pct), 60.00);
    }

    #[test]
    fn underdog_moneyline() {
        let c = calc(OddsFormat::American, "+200", "50");
        assert_eq!(cents(c.potential_payout), 150.00);
        assert_eq!(cents(c.implied_probability_pct), 33.33);
    }

    #[test]
    fn standard_decimal_line() {
        let c = calc(OddsFormat::Decimal, "1.91", "100");
        assert_eq!(cents(c.potential_payout), 191.00);
        assert_eq!(cents(c.implied_probability_pct), 52.36);
    }

    #[test]
    fn standard_fractional_line() {
        let c = calc(OddsFormat::Fractional, "10/11", "110");
        assert_eq!(cents(c.potential_payout), 210.00);
        assert_eq!(cents(c.implied_probability_pct), 52.38);
    }

    #[test]
    fn positive_american_probability_decreases_with_price() {
        let mut last = 1.0;
        for n in [100, 110, 150, 200, 400, 1000, 10_000] {
            let p = Odds::American(n).implied_probability();
            assert_eq!(p, 100.0 / (n as f64 + 100.0));
            assert!(p > 0.0 && p < last, "+{n} gave {p}");
            last = p;
        }
    }

    #[test]
    fn negative_american_probability_increases_with_magnitude() {
        let mut last = 0.0;
        for n in [-100, -110, -150, -200, -400, -1000, -10_000] {
            let p = Odds::American(n).implied_probability();
            assert!(p < 1.0 && p > last, "{n} gave {p}");
            last = p;
        }
    }

    #[test]
    fn even_money_is_the_same_price_in_every_notation() {
        let stake = Stake::parse("25").unwrap();
        for odds in [Odds::American(100), Odds::Decimal(2.0), Odds::Fractional(1, 1)] {
            assert_eq!(odds.implied_probability(), 0.5);
            assert_eq!(odds.payout(stake), 50.0);
        }
        // The negative side of even money prices identically.
        assert_eq!(Odds::American(-100).implied_probability(), 0.5);
        assert_eq!(Odds::American(-100).payout(stake), 50.0);
    }

    #[test]
    fn decimal_payout_is_exactly_the_multiple() {
        for (d, s) in [(1.91, 100.0), (2.5, 40.0), (10.0, 3.0)] {
            let odds = Odds::Decimal(d);
            let stake = Stake::parse(&s.to_string()).unwrap();
            assert_eq!(odds.payout(stake), d * s);
            assert!((odds.implied_probability() * d - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn probability_and_payout_contracts_hold() {
        let samples = [
            Odds::American(100),
            Odds::American(-100),
            Odds::American(575),
            Odds::American(-2500),
            Odds::Decimal(1.01),
            Odds::Decimal(19.5),
            Odds::Fractional(1, 20),
            Odds::Fractional(20, 1),
        ];
        let stake = Stake::parse("12.50").unwrap();
        for odds in samples {
            let p = odds.implied_probability();
            assert!(p > 0.0 && p < 1.0, "{odds:?} gave probability {p}");
            assert!(odds.payout(stake) > stake.amount(), "{odds:?}");
            assert!(odds.to_decimal() > 1.0, "{odds:?}");
        }
    }

    #[test]
    fn rejects_zero_and_malformed_odds() {
        assert!(!validate("0", OddsFormat::American));
        assert!(!validate("+0", OddsFormat::American));
        assert!(!validate("-0", OddsFormat::American));
        assert!(!validate("110.5", OddsFormat::American));
        assert!(!validate("--110", OddsFormat::American));
        assert!(!validate("1.0", OddsFormat::Decimal));
        assert!(!validate("0.91", OddsFormat::Decimal));
        assert!(!validate("-1.91", OddsFormat::Decimal));
        assert!(!validate("1.5.2", OddsFormat::Decimal));
        assert!(!validate("2e1", OddsFormat::Decimal));
        assert!(!validate("5/0", OddsFormat::Fractional));
        assert!(!validate("0/5", OddsFormat::Fractional));
        assert!(!validate("-1/2", OddsFormat::Fractional));
        assert!(!validate("10/11/12", OddsFormat::Fractional));
        assert!(!validate("10/", OddsFormat::Fractional));
        for format in OddsFormat::all() {
            assert!(!validate("", *format));
            assert!(!validate("abc", *format));
        }
    }

    #[test]
    fn boundary_prices_are_valid() {
        assert!(validate("+100", OddsFormat::American));
        assert!(validate("-100", OddsFormat::American));
        assert!(validate("1.01", OddsFormat::Decimal));
        assert!(validate("1/1", OddsFormat::Fractional));
    }

    #[test]
    fn rejects_bad_stakes() {
        for stake in ["", "0", "-5", "abc", "NaN", "inf"] {
            assert_eq!(
                calculate(OddsFormat::American, "-110", stake),
                Err(InputError::InvalidStake),
                "stake {stake:?}"
            );
        }
    }

    #[test]
    fn odds_errors_win_over_stake_errors() {
        assert_eq!(
            calculate(OddsFormat::American, "0", "-1"),
            Err(InputError::InvalidOdds(OddsFormat::American))
        );
    }

    #[test]
    fn identical_inputs_give_bit_identical_results() {
        let first = calculate(OddsFormat::Fractional, "7/2", "33.5").unwrap();
        let second = calculate(OddsFormat::Fractional, "7/2", "33.5").unwrap();
        assert_eq!(
            first.implied_probability_pct.to_bits(),
            second.implied_probability_pct.to_bits()
        );
        assert_eq!(
            first.potential_payout.to_bits(),
            second.potential_payout.to_bits()
        );
    }

    #[test]
    fn renders_prices_across_notations() {
        assert_eq!(format_american(Odds::American(-110).to_decimal()), "-110");
        assert_eq!(format_american(Odds::American(150).to_decimal()), "+150");
        assert_eq!(format_american(Odds::Decimal(2.0).to_decimal()), "+100");
        assert_eq!(format_fractional(Odds::American(-110).to_decimal()), "10/11");
        assert_eq!(format_fractional(Odds::Decimal(2.5).to_decimal()), "3/2");
        assert_eq!(format_decimal(Odds::Fractional(10, 11).to_decimal()), "1.91");
    }
}
