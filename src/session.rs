use crate::calculator::{self, Calculation, Rules};
use crate::config::WidgetConfig;
use crate::error::{InputError, Result};
use crate::input::{self, FieldKind};
use crate::log::console_log;
use crate::steps::{build_steps, Step};
use crate::types::{Fraction, Operation};

// 画面上の入力と直近の計算結果
pub struct Session {
    config: WidgetConfig,
    fraction1: Fraction,
    fraction2: Fraction,
    operation: Operation,
    calculation: Option<Calculation>,
    error: Option<InputError>,
}

impl Session {
    pub fn new(config: WidgetConfig) -> Self {
        Session {
            fraction1: config.fraction1,
            fraction2: config.fraction2,
            operation: config.operation,
            calculation: None,
            error: None,
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn rules(&self) -> Rules {
        Rules {
            allow_improper: self.config.allow_improper,
            allow_mixed: self.config.allow_mixed,
        }
    }

    // 入力が変わったら前の結果は捨てる
    fn invalidate(&mut self) {
        self.calculation = None;
        self.error = None;
    }

    fn fraction_mut(&mut self, which: u8) -> Result<&mut Fraction> {
        match which {
            1 => Ok(&mut self.fraction1),
            2 => Ok(&mut self.fraction2),
            _ => Err(InputError::Parse(format!("No fraction number {}", which))),
        }
    }

    pub fn set_field(&mut self, which: u8, field: &str, text: &str) -> Result<()> {
        let kind = FieldKind::parse(field)
            .ok_or_else(|| InputError::Parse(format!("Unknown field: {}", field)))?;
        let value = input::parse_field(text, kind)?;
        kind.apply(self.fraction_mut(which)?, value);
        self.invalidate();
        Ok(())
    }

    pub fn set_fraction(&mut self, which: u8, text: &str) -> Result<()> {
        let fraction = input::parse_fraction(text)?;
        *self.fraction_mut(which)? = fraction;
        self.invalidate();
        Ok(())
    }

    pub fn set_operation(&mut self, name: &str) -> Result<()> {
        self.operation = Operation::parse(name)
            .ok_or_else(|| InputError::Parse(format!("Unknown operation: {}", name)))?;
        self.invalidate();
        Ok(())
    }

    pub fn calculate(&mut self) -> Result<Vec<Step>> {
        self.invalidate();
        match calculator::calculate(self.fraction1, self.fraction2, self.operation, self.rules()) {
            Ok(calc) => {
                console_log!(
                    "{} {} {} = {}",
                    calc.original1, calc.operation, calc.original2, calc.result
                );
                let steps = build_steps(&calc);
                self.calculation = Some(calc);
                Ok(steps)
            }
            Err(e) => {
                console_log!("Calculation rejected: {}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn get_inputs(&self) -> (Fraction, Fraction, Operation) {
        (self.fraction1, self.fraction2, self.operation)
    }

    pub fn get_calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    pub fn get_steps(&self) -> Option<Vec<Step>> {
        self.calculation.as_ref().map(build_steps)
    }

    pub fn get_error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Session::new(self.config.clone());
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(WidgetConfig::default())
    }
}
