mod burn;
mod mint;
mod swap;
mod transfer;
mod unknown;

pub(crate) use burn::parse_burn;
pub(crate) use mint::{parse_compressed_mint, parse_mint};
pub(crate) use swap::parse_swap;
pub(crate) use transfer::parse_transfer;
pub(crate) use unknown::parse_unknown;

use crate::types::{
    NativeTransfer, NormalizedTransaction, RawTransactionRecord, TokenTransfer,
};

/// Convert raw native deltas, keeping only fully attributed entries.
/// Input order is preserved; a record with a missing side or amount is an
/// upstream gap, not a movement we can represent as a directed record.
pub(crate) fn native_movements(record: &RawTransactionRecord) -> Vec<NativeTransfer> {
    record
        .native_transfers
        .iter()
        .filter_map(|raw| {
            match (&raw.from_user_account, &raw.to_user_account, raw.amount) {
                (Some(from), Some(to), Some(amount)) => Some(NativeTransfer {
                    from: from.clone(),
                    to: to.clone(),
                    amount_lamports: amount,
                }),
                _ => None,
            }
        })
        .collect()
}

/// Convert raw token deltas. Mint and amount are required; the user-account
/// sides may legitimately be absent (mints have no source, burns no
/// destination) and default to empty.
pub(crate) fn token_movements(record: &RawTransactionRecord) -> Vec<TokenTransfer> {
    record
        .token_transfers
        .iter()
        .filter_map(|raw| match (&raw.mint, raw.token_amount) {
            (Some(mint), Some(amount)) => Some(TokenTransfer {
                from: raw.from_user_account.clone().unwrap_or_default(),
                to: raw.to_user_account.clone().unwrap_or_default(),
                from_token_account: raw.from_token_account.clone().unwrap_or_default(),
                to_token_account: raw.to_token_account.clone().unwrap_or_default(),
                mint: mint.clone(),
                amount,
            }),
            _ => None,
        })
        .collect()
}

/// Header fields every variant copies verbatim from the raw record.
pub(crate) fn base_transaction(record: &RawTransactionRecord) -> NormalizedTransaction {
    NormalizedTransaction {
        signature: record.signature.clone(),
        slot: record.slot,
        timestamp: record.timestamp,
        fee: record.fee,
        fee_payer: record.fee_payer.clone(),
        ..NormalizedTransaction::default()
    }
}
