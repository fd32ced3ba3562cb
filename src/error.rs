use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("The bottom number (denominator) cannot be zero!")]
    ZeroDenominator,
    #[error("Please use positive numbers for fractions.")]
    Negative,
    #[error("Please use fractions where the top number is not bigger than the bottom one.")]
    TopBiggerThanBottom,
    #[error("Those numbers are too large to add up.")]
    TooLarge,
    #[error("Could not read input: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, InputError>;
