//! Core library entry point exposing the classifier, the instruction
//! decoder, the security.txt micro-parser, and the public data types.

mod actions;

pub mod config;
pub mod core;
pub mod decoder;
pub mod security_txt;
pub mod types;

pub use crate::config::ClassifyConfig;
pub use crate::core::classifier::TransactionClassifier;
pub use crate::core::description::{normalize, NormalizedDescription};
pub use crate::core::detectors::is_tip;
pub use crate::decoder::{IdlRegistry, InstructionDecoder, NullRegistry};
pub use crate::security_txt::{SecurityTxt, SecurityTxtError};
pub use crate::types::{
    ActionKind, ArgValue, InstructionView, NativeTransfer, NormalizedTransaction,
    RawInstruction, RawNativeTransfer, RawTokenTransfer, RawTransactionRecord, TokenTransfer,
};
