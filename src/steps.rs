use serde::{Deserialize, Serialize};
use crate::calculator::Calculation;
use crate::pie::{result_pies, LabeledPie, PieChart};
use crate::types::{Fraction, ImproperFraction, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Originals,
    ToImproper,
    CommonDenominator,
    Combine,
}

// 一つの分数の表示（変換前の分数は任意）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionView {
    pub text: String,
    pub num: i64,
    pub den: i64,
    pub whole: Option<i64>,
    pub original: Option<String>,
    pub pie: Option<PieChart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub title: String,
    pub explanation: Option<String>,
    pub operands: Vec<FractionView>,
    pub symbol: String,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub text: String,
    pub num: i64,
    pub den: u64,
    pub mixed: String,
    pub pies: Vec<LabeledPie>,
}

impl FractionView {
    fn of_input(fraction: &Fraction) -> Self {
        // 帯分数のパイは仮分数の量で塗る
        let filled = fraction.whole_part().saturating_mul(fraction.den).saturating_add(fraction.num);
        FractionView {
            text: fraction.to_string(),
            num: fraction.num,
            den: fraction.den,
            whole: fraction.whole.filter(|w| *w != 0),
            original: None,
            pie: PieChart::new(filled, fraction.den).ok(),
        }
    }

    fn of_improper(fraction: &ImproperFraction, original: Option<String>) -> Self {
        let num = fraction.num as i64;
        let den = fraction.den as i64;
        FractionView {
            text: fraction.to_string(),
            num,
            den,
            whole: None,
            original,
            pie: PieChart::new(num, den).ok(),
        }
    }
}

fn combine_title(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "Add Them Together!",
        Operation::Subtract => "Subtract Them!",
    }
}

fn common_denominator_explanation(operation: Operation, common_denominator: u64) -> String {
    let verb = match operation {
        Operation::Add => "add",
        Operation::Subtract => "subtract",
    };
    format!(
        "To {} fractions, they need to have the same number of slices. We turn both pies into {} slices!",
        verb, common_denominator
    )
}

pub fn build_steps(calc: &Calculation) -> Vec<Step> {
    let symbol = calc.operation.symbol().to_string();
    let mut steps = Vec::new();

    steps.push(Step {
        kind: StepKind::Originals,
        title: String::new(),
        explanation: None,
        operands: vec![
            FractionView::of_input(&calc.original1),
            FractionView::of_input(&calc.original2),
        ],
        symbol: symbol.clone(),
        result: None,
    });

    if calc.has_mixed_input() {
        steps.push(Step {
            kind: StepKind::ToImproper,
            title: String::new(),
            explanation: Some(
                "Each whole pie is as many slices as the bottom number. Count them all into the top number!"
                    .to_string(),
            ),
            operands: vec![
                FractionView::of_improper(&calc.improper1, Some(calc.original1.to_string())),
                FractionView::of_improper(&calc.improper2, Some(calc.original2.to_string())),
            ],
            symbol: symbol.clone(),
            result: None,
        });
    }

    steps.push(Step {
        kind: StepKind::CommonDenominator,
        title: String::new(),
        explanation: Some(common_denominator_explanation(calc.operation, calc.common_denominator)),
        operands: vec![
            FractionView::of_improper(&calc.converted1, Some(calc.improper1.to_string())),
            FractionView::of_improper(&calc.converted2, Some(calc.improper2.to_string())),
        ],
        symbol: symbol.clone(),
        result: None,
    });

    steps.push(Step {
        kind: StepKind::Combine,
        title: String::new(),
        explanation: None,
        operands: vec![
            FractionView::of_improper(&calc.converted1, None),
            FractionView::of_improper(&calc.converted2, None),
        ],
        symbol,
        result: Some(ResultView {
            text: calc.result.to_string(),
            num: calc.result.num,
            den: calc.result.den,
            mixed: calc.result.to_mixed().to_string(),
            pies: result_pies(&calc.result),
        }),
    });

    // 番号付きのタイトル（Step 2 は帯分数がある時だけ）
    for (i, step) in steps.iter_mut().enumerate() {
        let name = match step.kind {
            StepKind::Originals => "Your Original Fractions".to_string(),
            StepKind::ToImproper => "Turn Mixed Numbers into Improper Fractions".to_string(),
            StepKind::CommonDenominator => {
                format!("Find a Common Denominator ({})", calc.common_denominator)
            }
            StepKind::Combine => combine_title(calc.operation).to_string(),
        };
        step.title = format!("Step {}: {}", i + 1, name);
    }

    steps
}
