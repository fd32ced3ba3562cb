use std::f64::consts::PI;
use std::fmt::Write;
use serde::{Deserialize, Serialize};
use crate::types::SignedFraction;

pub const FILLED_COLOR: &str = "#2dd4bf";
pub const EMPTY_COLOR: &str = "#f0f9ff";
pub const BORDER_COLOR: &str = "#a1a1aa";

// 12時の位置から時計回り
const START_ANGLE: f64 = 90.0;
const END_ANGLE: f64 = -270.0;

// 描画する満杯のパイの上限
pub const MAX_WHOLE_PIES: u64 = 100;
// 一つのパイに描ける切れ数の上限
pub const MAX_SLICES: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub numerator: u64,
    pub denominator: u64,
    pub slices: Vec<Slice>,
}

/// One pie of a result, with the caption shown beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPie {
    pub pie: Option<PieChart>,
    pub label: String,
    pub negative: bool,
}

impl PieChart {
    pub fn new(numerator: i64, denominator: i64) -> Result<PieChart, String> {
        if denominator <= 0 {
            return Err("Invalid denominator".to_string());
        }
        if denominator > MAX_SLICES {
            return Err(format!("Too many slices to draw ({})", denominator));
        }
        let denominator = denominator as u64;
        let numerator = numerator.max(0) as u64;
        let step = (START_ANGLE - END_ANGLE) / denominator as f64;

        let slices = (0..denominator)
            .map(|i| Slice {
                start_angle: START_ANGLE - step * i as f64,
                end_angle: START_ANGLE - step * (i + 1) as f64,
                filled: i < numerator,
            })
            .collect();

        Ok(PieChart { numerator, denominator, slices })
    }

    pub fn filled_count(&self) -> usize {
        self.slices.iter().filter(|s| s.filled).count()
    }

    pub fn to_svg(&self, size: u32) -> String {
        let center = size as f64 / 2.0;
        // outerRadius 80%
        let radius = center * 0.8;
        let mut svg = String::new();

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );

        if self.slices.len() == 1 {
            let fill = if self.slices[0].filled { FILLED_COLOR } else { EMPTY_COLOR };
            let _ = write!(
                svg,
                r#"<circle cx="{center}" cy="{center}" r="{radius:.3}" fill="{fill}" stroke="{BORDER_COLOR}" stroke-width="2" stroke-dasharray="5 5"/>"#
            );
        } else {
            for slice in &self.slices {
                let (x1, y1) = point(center, radius, slice.start_angle);
                let (x2, y2) = point(center, radius, slice.end_angle);
                let large_arc = if slice.start_angle - slice.end_angle > 180.0 { 1 } else { 0 };
                let fill = if slice.filled { FILLED_COLOR } else { EMPTY_COLOR };
                let _ = write!(
                    svg,
                    r#"<path d="M {center} {center} L {x1:.3} {y1:.3} A {radius:.3} {radius:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z" fill="{fill}" stroke="{BORDER_COLOR}" stroke-width="2" stroke-dasharray="5 5"/>"#
                );
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

// 数学座標の角度 → SVG座標（y軸は下向き）
fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle * PI / 180.0;
    (center + radius * rad.cos(), center - radius * rad.sin())
}

// 結果を「満杯のパイ」と「余りのパイ」に分ける
// 切れ数が多すぎて描けない場合はラベルだけ残る
pub fn result_pies(result: &SignedFraction) -> Vec<LabeledPie> {
    let mixed = result.to_mixed();
    let den = mixed.den as i64;
    let sign = if mixed.negative { "−" } else { "" };
    let mut pies = Vec::new();

    for _ in 0..mixed.whole.min(MAX_WHOLE_PIES) {
        pies.push(LabeledPie {
            pie: PieChart::new(den, den).ok(),
            label: format!("{}1", sign),
            negative: mixed.negative,
        });
    }

    if mixed.num > 0 {
        pies.push(LabeledPie {
            pie: PieChart::new(mixed.num as i64, den).ok(),
            label: format!("{}{}/{}", sign, mixed.num, mixed.den),
            negative: mixed.negative,
        });
    }

    if pies.is_empty() {
        pies.push(LabeledPie {
            pie: PieChart::new(0, den.max(1)).ok(),
            label: "0".to_string(),
            negative: false,
        });
    }

    pies
}
