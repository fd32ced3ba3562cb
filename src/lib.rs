use wasm_bindgen::prelude::*;

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod log;
pub mod math;
pub mod pie;
pub mod session;
pub mod steps;
pub mod types;

use crate::config::WidgetConfig;
use crate::log::console_warn;
use crate::pie::PieChart;
use crate::session::Session;

#[wasm_bindgen]
pub struct FractionWidget {
    session: Session,
}

#[wasm_bindgen]
impl FractionWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FractionWidget, String> {
        let config = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| e.to_string())?
        };
        Ok(FractionWidget {
            session: Session::new(config),
        })
    }

    #[wasm_bindgen]
    pub fn set_field(&mut self, which: u8, field: &str, text: &str) -> Result<(), String> {
        self.session.set_field(which, field, text).map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn set_fraction(&mut self, which: u8, text: &str) -> Result<(), String> {
        self.session.set_fraction(which, text).map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn set_operation(&mut self, operation: &str) -> Result<(), String> {
        self.session.set_operation(operation).map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn calculate(&mut self) -> Result<JsValue, String> {
        let steps = self.session.calculate().map_err(|e| e.to_string())?;
        to_js(&steps)
    }

    #[wasm_bindgen]
    pub fn get_calculation(&self) -> Result<JsValue, String> {
        match self.session.get_calculation() {
            Some(calc) => to_js(calc),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn get_steps(&self) -> Result<JsValue, String> {
        match self.session.get_steps() {
            Some(steps) => to_js(&steps),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn get_error(&self) -> Option<String> {
        self.session.get_error().map(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn get_inputs(&self) -> Result<JsValue, String> {
        let (fraction1, fraction2, operation) = self.session.get_inputs();
        let obj = js_sys::Object::new();
        set_prop(&obj, "fraction1", to_js(&fraction1)?)?;
        set_prop(&obj, "fraction2", to_js(&fraction2)?)?;
        set_prop(&obj, "operation", to_js(&operation)?)?;
        Ok(obj.into())
    }

    #[wasm_bindgen]
    pub fn pie_svg(&self, numerator: i64, denominator: i64, size: u32) -> Result<String, String> {
        let pie = PieChart::new(numerator, denominator)?;
        Ok(pie.to_svg(svg_size(size, self.session.config().pie_size)))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }
}

#[wasm_bindgen(js_name = gcd)]
pub fn js_gcd(a: u32, b: u32) -> u32 {
    math::gcd(a as u64, b as u64) as u32
}

#[wasm_bindgen(js_name = lcm)]
pub fn js_lcm(a: u32, b: u32) -> f64 {
    // u32同士の最小公倍数はu32に収まらないことがある
    math::lcm(a as u64, b as u64) as f64
}

// 0なら設定の大きさ
fn svg_size(requested: u32, configured: u32) -> u32 {
    if requested == 0 { configured } else { requested }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        console_warn!("Serialization failed: {}", e);
        e.to_string()
    })
}

fn set_prop(obj: &js_sys::Object, key: &str, value: JsValue) -> Result<(), String> {
    js_sys::Reflect::set(obj, &key.into(), &value)
        .map(|_| ())
        .map_err(|_| format!("Cannot set property {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_size_falls_back_to_config() {
        assert_eq!(svg_size(0, 192), 192);
        assert_eq!(svg_size(96, 192), 96);
    }

    #[test]
    fn requested_size_reaches_svg() {
        let pie = PieChart::new(1, 2).unwrap();
        let svg = pie.to_svg(svg_size(96, 192));
        assert!(svg.contains(r#"width="96""#));
    }
}
