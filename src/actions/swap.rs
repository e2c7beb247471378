use crate::core::constants::{format_lamports, format_token_amount, token_symbols};
use crate::core::description::{normalize, NormalizedDescription};
use crate::core::error::ClassifyError;
use crate::types::{
    ActionKind, NativeTransfer, NormalizedTransaction, RawTransactionRecord, TokenTransfer,
};

use super::{base_transaction, native_movements, token_movements};

/// Two movements attributable to one counterparty exchange around the fee
/// payer. When the upstream summary already matches the swap phrase its
/// captures are trusted for the description; otherwise both legs must be
/// found in the transfer lists or extraction fails (multi-party batches
/// degrade to unknown rather than guessing).
pub(crate) fn parse_swap(
    record: &RawTransactionRecord,
) -> Result<NormalizedTransaction, ClassifyError> {
    let native = native_movements(record);
    let tokens = token_movements(record);

    let description = match normalize(&record.description) {
        NormalizedDescription::Swap {
            amount_in,
            symbol_in,
            amount_out,
            symbol_out,
        } => format!("swapped {amount_in} {symbol_in} for {amount_out} {symbol_out}"),
        _ => {
            let (amount_in, symbol_in) = leg_out(record, &native, &tokens)?;
            let (amount_out, symbol_out) = leg_in(record, &native, &tokens)?;
            format!("swapped {amount_in} {symbol_in} for {amount_out} {symbol_out}")
        }
    };

    if native.is_empty() && tokens.is_empty() {
        return Err(ClassifyError::NoMovements);
    }

    let mut tx = base_transaction(record);
    tx.kind = ActionKind::Swap;
    tx.description = description;
    tx.native_transfers = native;
    tx.token_transfers = tokens;
    Ok(tx)
}

fn leg_out(
    record: &RawTransactionRecord,
    native: &[NativeTransfer],
    tokens: &[TokenTransfer],
) -> Result<(String, String), ClassifyError> {
    if let Some(movement) = tokens.iter().find(|t| t.from == record.fee_payer) {
        return Ok((
            format_token_amount(movement.amount, &movement.mint),
            token_symbols::symbol(&movement.mint),
        ));
    }
    if let Some(movement) = native.iter().find(|t| t.from == record.fee_payer) {
        return Ok((format_lamports(movement.amount_lamports), "SOL".to_string()));
    }
    Err(ClassifyError::Unattributable)
}

fn leg_in(
    record: &RawTransactionRecord,
    native: &[NativeTransfer],
    tokens: &[TokenTransfer],
) -> Result<(String, String), ClassifyError> {
    if let Some(movement) = tokens.iter().find(|t| t.to == record.fee_payer) {
        return Ok((
            format_token_amount(movement.amount, &movement.mint),
            token_symbols::symbol(&movement.mint),
        ));
    }
    if let Some(movement) = native.iter().find(|t| t.to == record.fee_payer) {
        return Ok((format_lamports(movement.amount_lamports), "SOL".to_string()));
    }
    Err(ClassifyError::Unattributable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawTokenTransfer;

    fn swap_record() -> RawTransactionRecord {
        RawTransactionRecord {
            signature: "sig".to_string(),
            fee_payer: "trader".to_string(),
            tx_type: "SWAP".to_string(),
            token_transfers: vec![
                RawTokenTransfer {
                    from_user_account: Some("trader".to_string()),
                    to_user_account: Some("pool".to_string()),
                    mint: Some(token_symbols::SOL_MINT.to_string()),
                    token_amount: Some(1_500_000_000),
                    ..RawTokenTransfer::default()
                },
                RawTokenTransfer {
                    from_user_account: Some("pool".to_string()),
                    to_user_account: Some("trader".to_string()),
                    mint: Some(token_symbols::USDC_MINT.to_string()),
                    token_amount: Some(20_000_000),
                    ..RawTokenTransfer::default()
                },
            ],
            ..RawTransactionRecord::default()
        }
    }

    #[test]
    fn synthesizes_description_from_both_legs() {
        let tx = parse_swap(&swap_record()).unwrap();
        assert_eq!(tx.kind, ActionKind::Swap);
        assert_eq!(tx.description, "swapped 1.5 SOL for 20 USDC");
        assert_eq!(tx.token_transfers.len(), 2);
    }

    #[test]
    fn upstream_swap_phrase_captures_are_preferred() {
        let mut record = swap_record();
        record.description = "trader swapped 1.5 SOL for 20 USDC on some venue".to_string();
        let tx = parse_swap(&record).unwrap();
        assert_eq!(tx.description, "swapped 1.5 SOL for 20 USDC");
    }

    #[test]
    fn missing_leg_is_unattributable() {
        let mut record = swap_record();
        record.token_transfers.truncate(1);
        assert!(parse_swap(&record).is_err());
    }
}
