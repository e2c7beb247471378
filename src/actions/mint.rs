use crate::core::constants::{format_token_amount, token_symbols};
use crate::core::error::ClassifyError;
use crate::types::{ActionKind, NormalizedTransaction, RawTransactionRecord};

use super::{base_transaction, native_movements, token_movements};

/// Standard token/NFT mint: a new unit created into a freshly allocated
/// account, visible as a token movement with no source.
pub(crate) fn parse_mint(
    record: &RawTransactionRecord,
) -> Result<NormalizedTransaction, ClassifyError> {
    let tokens = token_movements(record);
    let minted = tokens.first().ok_or(ClassifyError::NoMovements)?;

    let amount = format_token_amount(minted.amount, &minted.mint);
    let symbol = token_symbols::symbol(&minted.mint);

    let mut tx = base_transaction(record);
    tx.kind = ActionKind::Mint;
    tx.description = format!("minted {amount} {symbol}");
    tx.native_transfers = native_movements(record);
    tx.token_transfers = tokens;
    Ok(tx)
}

/// Compressed mint: the unit is tracked by a cryptographic summary instead
/// of an on-chain account allocation, so there may be no token movement at
/// all. The kind itself marks the account as space-optimized.
pub(crate) fn parse_compressed_mint(
    record: &RawTransactionRecord,
) -> Result<NormalizedTransaction, ClassifyError> {
    let tokens = token_movements(record);

    let description = match tokens.first() {
        Some(minted) => {
            let amount = format_token_amount(minted.amount, &minted.mint);
            let symbol = token_symbols::symbol(&minted.mint);
            format!("minted compressed {amount} {symbol}")
        }
        None => "minted a compressed NFT".to_string(),
    };

    let mut tx = base_transaction(record);
    tx.kind = ActionKind::CompressedMint;
    tx.description = description;
    tx.native_transfers = native_movements(record);
    tx.token_transfers = tokens;
    Ok(tx)
}
