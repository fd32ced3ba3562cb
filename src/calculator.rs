use serde::{Deserialize, Serialize};
use crate::error::{InputError, Result};
use crate::math::checked_lcm;
use crate::types::*;

/// Every intermediate value of one addition or subtraction, kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub original1: Fraction,
    pub original2: Fraction,
    pub improper1: ImproperFraction,
    pub improper2: ImproperFraction,
    pub common_denominator: u64,
    pub converted1: ImproperFraction,
    pub converted2: ImproperFraction,
    pub result: SignedFraction,
    pub operation: Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub allow_improper: bool,
    pub allow_mixed: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules { allow_improper: true, allow_mixed: true }
    }
}

impl Calculation {
    pub fn has_mixed_input(&self) -> bool {
        self.original1.is_mixed() || self.original2.is_mixed()
    }
}

pub fn validate(fraction: &Fraction, rules: Rules) -> Result<()> {
    if fraction.den == 0 {
        return Err(InputError::ZeroDenominator);
    }
    if fraction.num < 0 || fraction.den < 1 || fraction.whole_part() < 0 {
        return Err(InputError::Negative);
    }
    if !rules.allow_improper && fraction.num > fraction.den {
        return Err(InputError::TopBiggerThanBottom);
    }
    Ok(())
}

// 帯分数 → 仮分数（whole*den + num）
pub fn to_improper(fraction: &Fraction) -> Result<ImproperFraction> {
    let den = fraction.den as u64;
    let num = (fraction.whole_part() as u64)
        .checked_mul(den)
        .and_then(|w| w.checked_add(fraction.num as u64))
        .ok_or(InputError::TooLarge)?;
    Ok(ImproperFraction { num, den })
}

// 共通分母へ変換
fn scale(fraction: &ImproperFraction, common_denominator: u64) -> Result<ImproperFraction> {
    let factor = common_denominator / fraction.den;
    let num = fraction.num.checked_mul(factor).ok_or(InputError::TooLarge)?;
    Ok(ImproperFraction { num, den: common_denominator })
}

fn combine(a: u64, b: u64, operation: Operation) -> Result<i64> {
    let a = i64::try_from(a).map_err(|_| InputError::TooLarge)?;
    let b = i64::try_from(b).map_err(|_| InputError::TooLarge)?;
    let combined = match operation {
        Operation::Add => a.checked_add(b),
        Operation::Subtract => a.checked_sub(b),
    };
    combined.ok_or(InputError::TooLarge)
}

pub fn calculate(
    fraction1: Fraction,
    fraction2: Fraction,
    operation: Operation,
    rules: Rules,
) -> Result<Calculation> {
    let (fraction1, fraction2) = if rules.allow_mixed {
        (fraction1, fraction2)
    } else {
        (Fraction { whole: None, ..fraction1 }, Fraction { whole: None, ..fraction2 })
    };

    validate(&fraction1, rules)?;
    validate(&fraction2, rules)?;

    let improper1 = to_improper(&fraction1)?;
    let improper2 = to_improper(&fraction2)?;

    let common_denominator =
        checked_lcm(improper1.den, improper2.den).ok_or(InputError::TooLarge)?;

    let converted1 = scale(&improper1, common_denominator)?;
    let converted2 = scale(&improper2, common_denominator)?;

    let result = SignedFraction {
        num: combine(converted1.num, converted2.num, operation)?,
        den: common_denominator,
    };

    Ok(Calculation {
        original1: fraction1,
        original2: fraction2,
        improper1,
        improper2,
        common_denominator,
        converted1,
        converted2,
        result,
        operation,
    })
}
