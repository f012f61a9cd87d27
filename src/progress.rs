use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseProgressError;

/// Integer progress over a fixed denominator.
///
/// Whole-unit steps (10%, 1250‱) stay exact because the numerator is an
/// integer and the fraction is only formed at the last moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressUnit {
    /// 1/100
    Percent(i32),
    /// 1/1000
    Permil(i32),
    /// 1/10000
    BasisPoint(i32),
}

impl ProgressUnit {
    pub const fn numerator(self) -> i32 {
        match self {
            Self::Percent(n) | Self::Permil(n) | Self::BasisPoint(n) => n,
        }
    }

    pub const fn denominator(self) -> i32 {
        match self {
            Self::Percent(_) => 100,
            Self::Permil(_) => 1_000,
            Self::BasisPoint(_) => 10_000,
        }
    }

    /// Raw fraction `numerator / denominator`, not clamped.
    pub fn decimal(self) -> f64 {
        f64::from(self.numerator()) / f64::from(self.denominator())
    }

    /// Fraction clamped to `[0.0, 1.0]`.
    pub fn clamped(self) -> f64 {
        self.decimal().clamp(0.0, 1.0)
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Percent(_) => "%",
            Self::Permil(_) => "‰",
            Self::BasisPoint(_) => "‱",
        }
    }
}

impl fmt::Display for ProgressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.numerator(), self.symbol())
    }
}

impl FromStr for ProgressUnit {
    type Err = ParseProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseProgressError::Empty);
        }

        let suffixes: [(&str, fn(i32) -> Self); 5] = [
            ("%", Self::Percent),
            ("‰", Self::Permil),
            ("pm", Self::Permil),
            ("‱", Self::BasisPoint),
            ("bp", Self::BasisPoint),
        ];

        let (digits, unit) = suffixes
            .iter()
            .find_map(|(suffix, unit)| s.strip_suffix(suffix).map(|digits| (digits, *unit)))
            .ok_or_else(|| ParseProgressError::UnknownUnit(s.to_string()))?;

        let digits = digits.trim_end();
        digits
            .parse::<i32>()
            .map(unit)
            .map_err(|_| ParseProgressError::InvalidNumber(digits.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn decimal_uses_fixed_denominators() {
        assert_eq!(ProgressUnit::Percent(25).decimal(), 0.25);
        assert_eq!(ProgressUnit::Permil(250).decimal(), 0.25);
        assert_eq!(ProgressUnit::BasisPoint(1250).decimal(), 0.125);
        assert_eq!(ProgressUnit::BasisPoint(-5).denominator(), 10_000);
    }

    #[test]
    fn clamped_stays_in_unit_interval() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let n = rng.random_range(-50_000..50_000);
            for unit in [
                ProgressUnit::Percent(n),
                ProgressUnit::Permil(n),
                ProgressUnit::BasisPoint(n),
            ] {
                let p = unit.clamped();
                assert!((0.0..=1.0).contains(&p), "{unit} clamped to {p}");
                if (0..=unit.denominator()).contains(&n) {
                    assert_eq!(p, unit.decimal());
                }
            }
        }
        assert_eq!(ProgressUnit::Percent(150).clamped(), 1.0);
        assert_eq!(ProgressUnit::Permil(-1).clamped(), 0.0);
    }

    #[test]
    fn parses_all_suffixes() {
        assert_eq!("25%".parse(), Ok(ProgressUnit::Percent(25)));
        assert_eq!(" 250‰ ".parse(), Ok(ProgressUnit::Permil(250)));
        assert_eq!("250pm".parse(), Ok(ProgressUnit::Permil(250)));
        assert_eq!("1250‱".parse(), Ok(ProgressUnit::BasisPoint(1250)));
        assert_eq!("-10 bp".parse(), Ok(ProgressUnit::BasisPoint(-10)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!("".parse::<ProgressUnit>(), Err(ParseProgressError::Empty));
        assert_eq!(
            "25".parse::<ProgressUnit>(),
            Err(ParseProgressError::UnknownUnit("25".to_string()))
        );
        assert_eq!(
            "2.5%".parse::<ProgressUnit>(),
            Err(ParseProgressError::InvalidNumber("2.5".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for unit in [
            ProgressUnit::Percent(10),
            ProgressUnit::Permil(-3),
            ProgressUnit::BasisPoint(1250),
        ] {
            assert_eq!(unit.to_string().parse(), Ok(unit));
        }
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let json = serde_json::to_string(&ProgressUnit::BasisPoint(1250)).unwrap();
        assert_eq!(json, r#"{"basis_point":1250}"#);
        let unit: ProgressUnit = serde_json::from_str(r#"{"percent":40}"#).unwrap();
        assert_eq!(unit, ProgressUnit::Percent(40));
    }
}
