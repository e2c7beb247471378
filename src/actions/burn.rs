use crate::core::constants::{format_token_amount, token_symbols};
use crate::core::error::ClassifyError;
use crate::types::{ActionKind, NormalizedTransaction, RawTransactionRecord};

use super::{base_transaction, native_movements, token_movements};

/// Supply reduction. Mirrors mint extraction with inverted sign semantics:
/// the movement has a source but no destination.
pub(crate) fn parse_burn(
    record: &RawTransactionRecord,
) -> Result<NormalizedTransaction, ClassifyError> {
    let tokens = token_movements(record);
    let burned = tokens.first().ok_or(ClassifyError::NoMovements)?;

    let amount = format_token_amount(burned.amount, &burned.mint);
    let symbol = token_symbols::symbol(&burned.mint);

    let mut tx = base_transaction(record);
    tx.kind = ActionKind::Burn;
    tx.description = format!("burned {amount} {symbol}");
    tx.native_transfers = native_movements(record);
    tx.token_transfers = tokens;
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawTokenTransfer;

    #[test]
    fn burn_has_no_destination_side() {
        let record = RawTransactionRecord {
            signature: "sig".to_string(),
            tx_type: "BURN".to_string(),
            token_transfers: vec![RawTokenTransfer {
                from_user_account: Some("holder".to_string()),
                from_token_account: Some("holder-ata".to_string()),
                mint: Some(token_symbols::USDC_MINT.to_string()),
                token_amount: Some(3_000_000),
                ..RawTokenTransfer::default()
            }],
            ..RawTransactionRecord::default()
        };
        let tx = parse_burn(&record).unwrap();
        assert_eq!(tx.kind, ActionKind::Burn);
        assert_eq!(tx.description, "burned 3 USDC");
        assert_eq!(tx.token_transfers[0].to, "");
    }

    #[test]
    fn burn_requires_a_token_movement() {
        assert!(parse_burn(&RawTransactionRecord::default()).is_err());
    }
}
