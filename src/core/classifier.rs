use crate::actions::{
    native_movements, parse_burn, parse_compressed_mint, parse_mint, parse_swap, parse_transfer,
    parse_unknown,
};
use crate::config::ClassifyConfig;
use crate::core::detectors::is_tip;
use crate::types::{ActionKind, NormalizedTransaction, RawTransactionRecord};

/// Closed set of dispatchable type tags. Adding a transaction kind means
/// adding a variant here and an arm in `classify`, which the compiler checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TxTypeTag {
    Transfer,
    Swap,
    Mint,
    CompressedMint,
    Burn,
    Unknown,
}

impl TxTypeTag {
    fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "TRANSFER" => TxTypeTag::Transfer,
            "SWAP" => TxTypeTag::Swap,
            "TOKEN_MINT" | "NFT_MINT" | "MINT" => TxTypeTag::Mint,
            "COMPRESSED_NFT_MINT" | "COMPRESSED_MINT" => TxTypeTag::CompressedMint,
            "BURN" | "TOKEN_BURN" | "NFT_BURN" => TxTypeTag::Burn,
            _ => TxTypeTag::Unknown,
        }
    }
}

/// Type dispatcher: turns raw enriched records into normalized transactions.
///
/// Fail-soft by design: an unrecognized tag or any extraction failure inside
/// a variant parser falls through to the Unknown variant, so malformed
/// upstream data never aborts the caller's render loop.
pub struct TransactionClassifier {
    config: ClassifyConfig,
}

impl Default for TransactionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionClassifier {
    pub fn new() -> Self {
        Self::with_config(ClassifyConfig::default())
    }

    pub fn with_config(config: ClassifyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Classify one record. Never fails; worst case is an Unknown
    /// transaction carrying just the header fields.
    pub fn classify(&self, record: &RawTransactionRecord) -> NormalizedTransaction {
        let parsed = match TxTypeTag::from_tag(&record.tx_type) {
            TxTypeTag::Transfer => parse_transfer(record),
            TxTypeTag::Swap => parse_swap(record),
            TxTypeTag::Mint => parse_mint(record),
            TxTypeTag::CompressedMint => parse_compressed_mint(record),
            TxTypeTag::Burn => parse_burn(record),
            TxTypeTag::Unknown => Ok(parse_unknown(record)),
        };

        let mut normalized = match parsed {
            Ok(tx) => tx,
            Err(err) => {
                tracing::debug!(
                    signature = %record.signature,
                    tag = %record.tx_type,
                    %err,
                    "variant extraction failed, falling back to unknown"
                );
                parse_unknown(record)
            }
        };

        // Tip detection runs over the raw record's native deltas so that a
        // tip inside an otherwise-unclassifiable record is still caught.
        // Highest precedence in the dispatch order.
        let native = native_movements(record);
        if is_tip(
            &native,
            &self.config.tip_addresses,
            self.config.min_tip_lamports,
        ) {
            normalized.kind = ActionKind::Tip;
            if normalized.native_transfers.is_empty() {
                normalized.native_transfers = native;
            }
        }

        normalized
    }

    /// Classify a batch of records. Each record is independent; this is the
    /// fan-out entry point for callers rendering a page of transactions.
    pub fn classify_batch(&self, records: &[RawTransactionRecord]) -> Vec<NormalizedTransaction> {
        records.iter().map(|record| self.classify(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawNativeTransfer, RawTokenTransfer};

    fn transfer_record() -> RawTransactionRecord {
        RawTransactionRecord {
            signature: "sig".to_string(),
            slot: 7,
            timestamp: 1_700_000_000,
            fee: 5_000,
            fee_payer: "payer".to_string(),
            tx_type: "TRANSFER".to_string(),
            description: "payer transferred 1.5 SOL to receiver".to_string(),
            native_transfers: vec![RawNativeTransfer {
                from_user_account: Some("payer".to_string()),
                to_user_account: Some("receiver".to_string()),
                amount: Some(1_500_000_000),
            }],
            ..RawTransactionRecord::default()
        }
    }

    #[test]
    fn unrecognized_tag_is_unknown() {
        let mut record = transfer_record();
        record.tx_type = "STAKE_DELEGATE".to_string();
        record.description = String::new();
        let tx = TransactionClassifier::new().classify(&record);
        assert_eq!(tx.kind, ActionKind::Unknown);
        assert_eq!(tx.signature, "sig");
    }

    #[test]
    fn extraction_failure_matches_unknown_output() {
        // A transfer-tagged record with no extractable movement must produce
        // exactly what the Unknown variant produces for the same record.
        let record = RawTransactionRecord {
            signature: "sig".to_string(),
            tx_type: "TRANSFER".to_string(),
            description: "something odd".to_string(),
            native_transfers: vec![RawNativeTransfer::default()],
            ..RawTransactionRecord::default()
        };
        let classifier = TransactionClassifier::new();
        let via_dispatch = classifier.classify(&record);
        let via_unknown = crate::actions::parse_unknown(&record);
        assert_eq!(via_dispatch, via_unknown);
    }

    #[test]
    fn tip_overrides_transfer_kind() {
        let mut record = transfer_record();
        record.native_transfers.push(RawNativeTransfer {
            from_user_account: Some("payer".to_string()),
            to_user_account: Some("96gYZGLnJYVFmbjzopPSU6QiEV5fGqZNyN9nmNhvrZU5".to_string()),
            amount: Some(2_000),
        });
        let tx = TransactionClassifier::new().classify(&record);
        assert_eq!(tx.kind, ActionKind::Tip);
        assert_eq!(tx.native_transfers.len(), 2);
    }

    #[test]
    fn tip_inside_unknown_record_is_still_detected() {
        let record = RawTransactionRecord {
            signature: "sig".to_string(),
            tx_type: "SOMETHING_NEW".to_string(),
            native_transfers: vec![RawNativeTransfer {
                from_user_account: Some("payer".to_string()),
                to_user_account: Some("96gYZGLnJYVFmbjzopPSU6QiEV5fGqZNyN9nmNhvrZU5".to_string()),
                amount: Some(5_000),
            }],
            ..RawTransactionRecord::default()
        };
        let tx = TransactionClassifier::new().classify(&record);
        assert_eq!(tx.kind, ActionKind::Tip);
        assert_eq!(tx.native_transfers.len(), 1);
    }

    #[test]
    fn classification_is_idempotent_over_immutable_input() {
        let record = transfer_record();
        let classifier = TransactionClassifier::new();
        assert_eq!(classifier.classify(&record), classifier.classify(&record));
    }

    #[test]
    fn batch_preserves_record_order() {
        let records = vec![transfer_record(), RawTransactionRecord::default()];
        let results = TransactionClassifier::new().classify_batch(&records);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].kind, ActionKind::Transfer);
        assert_eq!(results[1].kind, ActionKind::Unknown);
    }

    #[test]
    fn mint_record_dispatches_to_mint_parser() {
        let record = RawTransactionRecord {
            signature: "sig".to_string(),
            tx_type: "TOKEN_MINT".to_string(),
            token_transfers: vec![RawTokenTransfer {
                to_user_account: Some("collector".to_string()),
                mint: Some("NftMint11111111111111111111111111111111111".to_string()),
                token_amount: Some(1),
                ..RawTokenTransfer::default()
            }],
            ..RawTransactionRecord::default()
        };
        let tx = TransactionClassifier::new().classify(&record);
        assert_eq!(tx.kind, ActionKind::Mint);
    }
}
