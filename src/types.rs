use std::fmt;
use serde::{Deserialize, Serialize};

// 入力された分数（帯分数を含む）
// 負の値もバリデーションまで届くように符号付きで保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whole: Option<i64>,
    pub num: i64,
    pub den: i64,
}

// 仮分数（整数部なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImproperFraction {
    pub num: u64,
    pub den: u64,
}

// 計算結果（引き算では分子が負になりうる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedFraction {
    pub num: i64,
    pub den: u64,
}

// 正規化された帯分数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u64,
    pub num: u64,
    pub den: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    Subtract,
}

impl Fraction {
    pub fn new(num: i64, den: i64) -> Self {
        Fraction { whole: None, num, den }
    }

    pub fn mixed(whole: i64, num: i64, den: i64) -> Self {
        Fraction { whole: Some(whole), num, den }
    }

    pub fn whole_part(&self) -> i64 {
        self.whole.unwrap_or(0)
    }

    pub fn is_mixed(&self) -> bool {
        self.whole_part() != 0
    }
}

impl ImproperFraction {
    pub fn to_mixed(&self) -> MixedNumber {
        SignedFraction {
            num: self.num as i64,
            den: self.den,
        }
        .to_mixed()
    }
}

impl SignedFraction {
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    // 分母0は1として扱う
    pub fn to_mixed(&self) -> MixedNumber {
        let magnitude = self.num.unsigned_abs();
        let den = self.den.max(1);
        MixedNumber {
            negative: self.num < 0,
            whole: magnitude / den,
            num: magnitude % den,
            den,
        }
    }
}

impl MixedNumber {
    // 帯分数 → 仮分数の分子（符号は別管理）
    pub fn improper_num(&self) -> u64 {
        self.whole * self.den + self.num
    }
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
        }
    }

    pub fn parse(name: &str) -> Option<Operation> {
        match name.trim().to_lowercase().as_str() {
            "add" | "+" | "plus" => Some(Operation::Add),
            "subtract" | "sub" | "-" | "−" | "minus" => Some(Operation::Subtract),
            _ => None,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_mixed() {
            write!(f, "{} {}/{}", self.whole_part(), self.num, self.den)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Display for ImproperFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for SignedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num == 0 {
            write!(f, "0")
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match (self.whole, self.num) {
            (0, 0) => write!(f, "0"),
            (w, 0) => write!(f, "{}{}", sign, w),
            (0, n) => write!(f, "{}{}/{}", sign, n, self.den),
            (w, n) => write!(f, "{}{} {}/{}", sign, w, n, self.den),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_round_trip() {
        let mixed = MixedNumber { negative: false, whole: 2, num: 1, den: 3 };
        let improper = ImproperFraction { num: mixed.improper_num(), den: 3 };
        assert_eq!(improper.num, 7);
        assert_eq!(improper.to_mixed(), mixed);
    }

    #[test]
    fn negative_result_to_mixed() {
        let result = SignedFraction { num: -7, den: 4 };
        let mixed = result.to_mixed();
        assert!(mixed.negative);
        assert_eq!((mixed.whole, mixed.num), (1, 3));
        assert_eq!(mixed.to_string(), "-1 3/4");
    }

    #[test]
    fn zero_denominator_to_mixed_does_not_panic() {
        let mixed = SignedFraction { num: 5, den: 0 }.to_mixed();
        assert_eq!((mixed.whole, mixed.num, mixed.den), (5, 0, 1));
        let mixed = ImproperFraction { num: 3, den: 0 }.to_mixed();
        assert_eq!(mixed.den, 1);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Fraction::mixed(1, 1, 2).to_string(), "1 1/2");
        assert_eq!(Fraction::mixed(0, 3, 4).to_string(), "3/4");
        assert_eq!(SignedFraction { num: 0, den: 6 }.to_string(), "0");
        assert_eq!(Operation::Subtract.to_string(), "−");
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::parse("Add"), Some(Operation::Add));
        assert_eq!(Operation::parse(" subtract "), Some(Operation::Subtract));
        assert_eq!(Operation::parse("times"), None);
    }
}
