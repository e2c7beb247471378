use std::collections::HashSet;

use crate::types::NativeTransfer;

/// Returns true iff at least one transfer lands on a known tip collector
/// address with an amount at or above the threshold. The full list is
/// scanned: tips frequently ride along with other transfers in one record.
/// Pure and side-effect-free; the address set and threshold are caller data.
pub fn is_tip(
    transfers: &[NativeTransfer],
    known_tip_addresses: &HashSet<String>,
    min_amount: u64,
) -> bool {
    transfers
        .iter()
        .any(|transfer| {
            known_tip_addresses.contains(&transfer.to) && transfer.amount_lamports >= min_amount
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(to: &str, amount: u64) -> NativeTransfer {
        NativeTransfer {
            from: "payer".to_string(),
            to: to.to_string(),
            amount_lamports: amount,
        }
    }

    fn known(addresses: &[&str]) -> HashSet<String> {
        addresses.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let addresses = known(&["tip-collector"]);
        assert!(is_tip(&[transfer("tip-collector", 1_000)], &addresses, 1_000));
        assert!(!is_tip(&[transfer("tip-collector", 999)], &addresses, 1_000));
    }

    #[test]
    fn scans_past_the_first_entry() {
        let addresses = known(&["tip-collector"]);
        let transfers = vec![
            transfer("merchant", 5_000_000),
            transfer("tip-collector", 2_000),
        ];
        assert!(is_tip(&transfers, &addresses, 1_000));
    }

    #[test]
    fn unknown_destination_is_not_a_tip() {
        let addresses = known(&["tip-collector"]);
        assert!(!is_tip(&[transfer("merchant", 10_000)], &addresses, 1_000));
        assert!(!is_tip(&[], &addresses, 1_000));
    }
}
