use serde::Serialize;

/// One segment of a piecewise-linear duty schedule.
///
/// Both ends are inclusive. Adjacent brackets in a schedule leave a one dollar
/// step between `max` and the next `min`, as the published tables do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bracket {
    pub min: f64,
    pub max: f64,
    pub base: f64,
    pub rate: f64,
}

impl Bracket {
    pub const fn new(min: f64, max: f64, base: f64, rate: f64) -> Self {
        Self {
            min,
            max,
            base,
            rate,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn charge(&self, value: f64) -> f64 {
        self.base + self.rate * (value - self.min)
    }
}

/// Evaluates `base + rate * (value - min)` for the bracket holding `value`.
///
/// Rounding is left to the caller. Negative values and empty schedules yield
/// zero. A value above every bracket, or one that falls in the gap between a
/// bracket's `max` and the next `min`, is charged on the last bracket whose
/// `min` it reaches.
pub fn evaluate(value: f64, brackets: &[Bracket]) -> f64 {
    if value.is_nan() || value < 0.0 {
        return 0.0;
    }

    if let Some(bracket) = brackets.iter().find(|bracket| bracket.contains(value)) {
        return bracket.charge(value);
    }

    brackets
        .iter()
        .rev()
        .find(|bracket| bracket.min <= value)
        .map(|bracket| bracket.charge(value))
        .unwrap_or(0.0)
}

/// Rounds to the nearest whole dollar, halves rounding up.
pub fn round_currency(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to the nearest cent, halves rounding up.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Formats a dollar amount with thousands separators, e.g. `17,350`.
pub fn format_dollars(value: f64) -> String {
    let whole = round_currency(value.abs()) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0.0 && whole > 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [Bracket; 3] = [
        Bracket::new(0.0, 10_000.0, 0.0, 0.01),
        Bracket::new(10_001.0, 50_000.0, 100.0, 0.02),
        Bracket::new(50_001.0, f64::INFINITY, 900.0, 0.05),
    ];

    #[test]
    fn charges_the_bracket_containing_the_value() {
        assert_eq!(evaluate(5_000.0, &SAMPLE), 50.0);
        assert_eq!(evaluate(10_001.0, &SAMPLE), 100.0);
        assert_eq!(evaluate(20_001.0, &SAMPLE), 300.0);
        assert_eq!(evaluate(60_001.0, &SAMPLE), 1_400.0);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(evaluate(10_000.0, &SAMPLE), 100.0);
        assert_eq!(evaluate(0.0, &SAMPLE), 0.0);
    }

    #[test]
    fn negative_values_and_empty_schedules_are_free() {
        assert_eq!(evaluate(-1.0, &SAMPLE), 0.0);
        assert_eq!(evaluate(250_000.0, &[]), 0.0);
    }

    #[test]
    fn extrapolates_from_last_bracket_when_schedule_is_bounded() {
        let bounded = [Bracket::new(0.0, 100.0, 0.0, 0.1)];
        assert_eq!(evaluate(200.0, &bounded), 20.0);
    }

    #[test]
    fn fractional_values_between_brackets_use_the_lower_bracket() {
        let duty = evaluate(10_000.5, &SAMPLE);
        assert!((duty - 100.005).abs() < 1e-9);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_currency(212.5), 213.0);
        assert_eq!(round_currency(212.49), 212.0);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(171.7), 171.7);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_dollars(17_350.0), "17,350");
        assert_eq!(format_dollars(1_500_000.0), "1,500,000");
        assert_eq!(format_dollars(950.0), "950");
        assert_eq!(format_dollars(0.0), "0");
    }
}
