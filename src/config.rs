use serde::{Deserialize, Serialize};
use crate::types::{Fraction, Operation};

/// Options the host page may pass when creating a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub fraction1: Fraction,
    pub fraction2: Fraction,
    pub operation: Operation,
    /// When false, a numerator larger than its denominator is rejected.
    pub allow_improper: bool,
    /// When false, whole parts are ignored.
    pub allow_mixed: bool,
    pub pie_size: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            fraction1: Fraction::new(1, 2),
            fraction2: Fraction::new(1, 3),
            operation: Operation::Add,
            allow_improper: true,
            allow_mixed: true,
            pie_size: 192,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{ "operation": "subtract", "allow_improper": false }"#).unwrap();
        assert_eq!(config.operation, Operation::Subtract);
        assert!(!config.allow_improper);
        assert!(config.allow_mixed);
        assert_eq!(config.fraction1, Fraction::new(1, 2));
        assert_eq!(config.pie_size, 192);
    }

    #[test]
    fn mixed_fraction_in_config() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{ "fraction1": { "whole": 1, "num": 1, "den": 2 } }"#).unwrap();
        assert_eq!(config.fraction1, Fraction::mixed(1, 1, 2));
        assert_eq!(config.fraction2, Fraction::new(1, 3));
    }
}
