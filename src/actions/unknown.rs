use crate::types::{ActionKind, NormalizedTransaction, RawTransactionRecord};

use super::base_transaction;

/// Universal fallback. Copies the header fields, passes the upstream
/// description through unchanged, and leaves the transfer lists empty;
/// no domain-specific extraction is attempted. Infallible by construction.
pub(crate) fn parse_unknown(record: &RawTransactionRecord) -> NormalizedTransaction {
    let mut tx = base_transaction(record);
    tx.kind = ActionKind::Unknown;
    tx.description = record.description.clone();
    tx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_header_and_leaves_lists_empty() {
        let record = RawTransactionRecord {
            signature: "sig".to_string(),
            slot: 42,
            timestamp: 1_700_000_000,
            fee: 5_000,
            fee_payer: "payer".to_string(),
            tx_type: "SOMETHING_NEW".to_string(),
            description: "did something new".to_string(),
            ..RawTransactionRecord::default()
        };
        let tx = parse_unknown(&record);
        assert_eq!(tx.kind, ActionKind::Unknown);
        assert_eq!(tx.signature, "sig");
        assert_eq!(tx.slot, 42);
        assert_eq!(tx.fee, 5_000);
        assert_eq!(tx.description, "did something new");
        assert!(tx.native_transfers.is_empty());
        assert!(tx.token_transfers.is_empty());
    }
}
