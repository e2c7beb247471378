use crate::core::constants::{format_lamports, format_token_amount, token_symbols};
use crate::core::error::ClassifyError;
use crate::types::{ActionKind, NormalizedTransaction, RawTransactionRecord};

use super::{base_transaction, native_movements, token_movements};

/// Single native or token movement. The first attributable movement drives
/// the description; all movements are carried through in ledger order.
pub(crate) fn parse_transfer(
    record: &RawTransactionRecord,
) -> Result<NormalizedTransaction, ClassifyError> {
    let native = native_movements(record);
    let tokens = token_movements(record);

    let (amount, symbol) = if let Some(movement) = tokens.first() {
        (
            format_token_amount(movement.amount, &movement.mint),
            token_symbols::symbol(&movement.mint),
        )
    } else if let Some(movement) = native.first() {
        (format_lamports(movement.amount_lamports), "SOL".to_string())
    } else {
        return Err(ClassifyError::NoMovements);
    };

    let mut tx = base_transaction(record);
    tx.kind = ActionKind::Transfer;
    tx.description = format!("{amount} {symbol} transferred");
    tx.native_transfers = native;
    tx.token_transfers = tokens;
    Ok(tx)
}
