use std::num::IntErrorKind;
use crate::error::{InputError, Result};
use crate::log::console_warn;
use crate::types::Fraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Whole,
    Numerator,
    Denominator,
}

impl FieldKind {
    // 数値として読めなかった時の既定値
    pub fn default_value(&self) -> i64 {
        match self {
            FieldKind::Whole | FieldKind::Numerator => 0,
            FieldKind::Denominator => 1,
        }
    }

    pub fn parse(name: &str) -> Option<FieldKind> {
        match name {
            "whole" => Some(FieldKind::Whole),
            "num" | "numerator" => Some(FieldKind::Numerator),
            "den" | "denominator" => Some(FieldKind::Denominator),
            _ => None,
        }
    }

    pub fn apply(&self, fraction: &mut Fraction, value: i64) {
        match self {
            FieldKind::Whole => fraction.whole = Some(value),
            FieldKind::Numerator => fraction.num = value,
            FieldKind::Denominator => fraction.den = value,
        }
    }
}

// 入力欄の値を整数として読む
// 先頭の数字部分だけを使い、読めなければ既定値
// 桁あふれは既定値にせずエラー
pub fn parse_field(text: &str, kind: FieldKind) -> Result<i64> {
    let text = text.trim();
    let mut chars = text.chars().peekable();
    let mut digits = String::new();

    if let Some(&ch) = chars.peek() {
        if ch == '-' || ch == '+' {
            digits.push(ch);
            chars.next();
        }
    }
    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(ch);
        chars.next();
    }

    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(InputError::TooLarge)
        }
        Err(_) => {
            if !text.is_empty() {
                console_warn!("Unreadable {:?} entry '{}', using {}", kind, text, kind.default_value());
            }
            Ok(kind.default_value())
        }
    }
}

fn parse_int(word: &str, what: &str) -> Result<i64> {
    word.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::TooLarge,
        _ => InputError::Parse(format!("Invalid {}: {}", what, word)),
    })
}

// "1 1/2", "3/4", "2" 形式
pub fn parse_fraction(input: &str) -> Result<Fraction> {
    let words: Vec<&str> = input.split_whitespace().collect();

    match words.as_slice() {
        [single] if single.contains('/') => parse_simple(single).map(|(num, den)| Fraction::new(num, den)),
        [single] => Ok(Fraction::mixed(parse_int(single, "whole number")?, 0, 1)),
        [whole, frac] if frac.contains('/') => {
            let whole = parse_int(whole, "whole number")?;
            let (num, den) = parse_simple(frac)?;
            Ok(Fraction::mixed(whole, num, den))
        }
        [] => Err(InputError::Parse("Empty fraction".to_string())),
        _ => Err(InputError::Parse(format!("Invalid fraction: {}", input.trim()))),
    }
}

fn parse_simple(word: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = word.split('/').collect();
    if parts.len() != 2 {
        return Err(InputError::Parse(format!("Invalid fraction: {}", word)));
    }
    let numerator = parse_int(parts[0], "fraction numerator")?;
    let denominator = parse_int(parts[1], "fraction denominator")?;
    Ok((numerator, denominator))
}
