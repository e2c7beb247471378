use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw instruction as delivered by the enrichment service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawInstruction {
    pub program_id: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub inner_instructions: Vec<RawInstruction>,
}

/// Native balance delta entry from the raw record. Fields may be absent
/// depending on the record shape, so everything is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawNativeTransfer {
    #[serde(default)]
    pub from_user_account: Option<String>,
    #[serde(default)]
    pub to_user_account: Option<String>,
    #[serde(default)]
    pub amount: Option<u64>,
}

/// Token balance delta entry from the raw record. Amounts are base units.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenTransfer {
    #[serde(default)]
    pub from_user_account: Option<String>,
    #[serde(default)]
    pub to_user_account: Option<String>,
    #[serde(default)]
    pub from_token_account: Option<String>,
    #[serde(default)]
    pub to_token_account: Option<String>,
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub token_amount: Option<u64>,
}

/// Enriched transaction record supplied by the caller's ingest layer.
/// The classifier only reads it; unknown extra fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionRecord {
    pub signature: String,
    #[serde(default)]
    pub slot: u64,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub fee_payer: String,
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<RawInstruction>,
    #[serde(default)]
    pub native_transfers: Vec<RawNativeTransfer>,
    #[serde(default)]
    pub token_transfers: Vec<RawTokenTransfer>,
}

/// Canonical action tags produced by classification.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Transfer,
    Swap,
    Mint,
    Burn,
    CompressedMint,
    Tip,
    #[default]
    Unknown,
}

/// A single directed lamport movement. Debit and credit of one logical
/// transfer are two records, never a signed single record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
    pub from: String,
    pub to: String,
    pub amount_lamports: u64,
}

/// A single directed token movement in base units.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub from: String,
    pub to: String,
    pub from_token_account: String,
    pub to_token_account: String,
    pub mint: String,
    pub amount: u64,
}

/// Normalized, typed representation of "what happened" in a transaction.
/// Transfer list ordering is preserved from the raw record; consumers rely
/// on ledger order for running-balance displays.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTransaction {
    pub signature: String,
    pub slot: u64,
    pub timestamp: u64,
    pub fee: u64,
    pub fee_payer: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub description: String,
    #[serde(default)]
    pub native_transfers: Vec<NativeTransfer>,
    #[serde(default)]
    pub token_transfers: Vec<TokenTransfer>,
}

/// Decoded argument value. Tagged union over the shapes an IDL can describe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ArgValue {
    String(String),
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
    Bytes(Vec<u8>),
    List(Vec<ArgValue>),
    Struct(BTreeMap<String, ArgValue>),
}

/// Result of attempting to decode one instruction. "Could not decode" is the
/// `Raw` variant of this type, not an error: callers render either shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum InstructionView {
    Decoded {
        program_id: String,
        name: String,
        args: BTreeMap<String, ArgValue>,
    },
    Raw {
        program_id: String,
        data: String,
    },
}

impl InstructionView {
    pub fn is_decoded(&self) -> bool {
        matches!(self, InstructionView::Decoded { .. })
    }

    pub fn program_id(&self) -> &str {
        match self {
            InstructionView::Decoded { program_id, .. } => program_id,
            InstructionView::Raw { program_id, .. } => program_id,
        }
    }
}
