use thiserror::Error;

/// Internal extraction failures raised by variant parsers. The dispatcher
/// consumes these and substitutes the Unknown variant; they never reach the
/// caller of `classify`.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("movement cannot be attributed to a counterparty")]
    Unattributable,
    #[error("record has no transfer entries to extract from")]
    NoMovements,
}
