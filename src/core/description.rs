use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ActionKind;

/// Classification of a free-text action summary produced by the upstream
/// enrichment service. This is a best-effort heuristic over human-readable
/// phrases, not a ledger-level source of truth: summaries outside the known
/// templates come back `Unclassified` with the original text intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NormalizedDescription {
    MultipleAccounts,
    Swap {
        amount_in: String,
        symbol_in: String,
        amount_out: String,
        symbol_out: String,
    },
    Transfer {
        amount: String,
        symbol: String,
    },
    CompressedMint,
    Burn {
        amount: String,
        symbol: String,
    },
    Mint {
        amount: String,
        symbol: String,
    },
    Unclassified(String),
}

impl NormalizedDescription {
    pub fn kind(&self) -> ActionKind {
        match self {
            NormalizedDescription::MultipleAccounts => ActionKind::Unknown,
            NormalizedDescription::Swap { .. } => ActionKind::Swap,
            NormalizedDescription::Transfer { .. } => ActionKind::Transfer,
            NormalizedDescription::CompressedMint => ActionKind::CompressedMint,
            NormalizedDescription::Burn { .. } => ActionKind::Burn,
            NormalizedDescription::Mint { .. } => ActionKind::Mint,
            NormalizedDescription::Unclassified(_) => ActionKind::Unknown,
        }
    }
}

static MULTIPLE_ACCOUNTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)multiple accounts").expect("invalid regex"));
static SWAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)swapped ([\d.,]+) (\S+) for ([\d.,]+) (\S+)").expect("invalid regex")
});
static TRANSFER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)transferred ([\d.,]+) (\S+)").expect("invalid regex"));
static COMPRESSED_MINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)minted (?:a )?compressed").expect("invalid regex"));
static BURN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)burned ([\d.,]+) (\S+)").expect("invalid regex"));
static MINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)minted ([\d.,]+) (\S+)").expect("invalid regex"));

/// Classify a free-text summary in fixed priority order. The priority is
/// load-bearing: the multiple-accounts marker wins over everything, and the
/// compressed-mint phrase must be checked before the generic mint phrase.
pub fn normalize(free_text: &str) -> NormalizedDescription {
    if MULTIPLE_ACCOUNTS_RE.is_match(free_text) {
        return NormalizedDescription::MultipleAccounts;
    }
    if let Some(caps) = SWAP_RE.captures(free_text) {
        return NormalizedDescription::Swap {
            amount_in: caps[1].to_string(),
            symbol_in: caps[2].to_string(),
            amount_out: caps[3].to_string(),
            symbol_out: caps[4].to_string(),
        };
    }
    if let Some(caps) = TRANSFER_RE.captures(free_text) {
        return NormalizedDescription::Transfer {
            amount: caps[1].to_string(),
            symbol: caps[2].to_string(),
        };
    }
    if COMPRESSED_MINT_RE.is_match(free_text) {
        return NormalizedDescription::CompressedMint;
    }
    if let Some(caps) = BURN_RE.captures(free_text) {
        return NormalizedDescription::Burn {
            amount: caps[1].to_string(),
            symbol: caps[2].to_string(),
        };
    }
    if let Some(caps) = MINT_RE.captures(free_text) {
        return NormalizedDescription::Mint {
            amount: caps[1].to_string(),
            symbol: caps[2].to_string(),
        };
    }
    NormalizedDescription::Unclassified(free_text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_swap_with_captures() {
        let result = normalize("swapped 1.5 SOL for 20 USDC");
        assert_eq!(
            result,
            NormalizedDescription::Swap {
                amount_in: "1.5".to_string(),
                symbol_in: "SOL".to_string(),
                amount_out: "20".to_string(),
                symbol_out: "USDC".to_string(),
            }
        );
        assert_eq!(result.kind(), ActionKind::Swap);
    }

    #[test]
    fn classifies_burn_with_captures() {
        let result = normalize("burned 3 NFT");
        assert_eq!(
            result,
            NormalizedDescription::Burn {
                amount: "3".to_string(),
                symbol: "NFT".to_string(),
            }
        );
        assert_eq!(result.kind(), ActionKind::Burn);
    }

    #[test]
    fn classifies_transfer() {
        let result = normalize("user transferred 0.5 SOL to somebody");
        assert_eq!(
            result,
            NormalizedDescription::Transfer {
                amount: "0.5".to_string(),
                symbol: "SOL".to_string(),
            }
        );
    }

    #[test]
    fn multiple_accounts_marker_wins_over_swap_phrase() {
        let result = normalize("multiple accounts swapped 1 SOL for 2 USDC");
        assert_eq!(result, NormalizedDescription::MultipleAccounts);
        assert_eq!(result.kind(), ActionKind::Unknown);
    }

    #[test]
    fn compressed_mint_checked_before_generic_mint() {
        assert_eq!(
            normalize("minted a compressed NFT"),
            NormalizedDescription::CompressedMint
        );
        assert_eq!(
            normalize("minted 1 NFT"),
            NormalizedDescription::Mint {
                amount: "1".to_string(),
                symbol: "NFT".to_string(),
            }
        );
    }

    #[test]
    fn unmatched_text_is_returned_unclassified() {
        let text = "staked 10 SOL with a validator";
        assert_eq!(
            normalize(text),
            NormalizedDescription::Unclassified(text.to_string())
        );
    }
}
