use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::constants::KNOWN_TIP_ADDRESSES;

/// Configuration for the classifier. Tip addresses and the minimum tip
/// amount are data supplied by the caller, not invariants of the parser:
/// updated address sets can be substituted without code changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyConfig {
    #[serde(default = "ClassifyConfig::default_tip_addresses")]
    pub tip_addresses: HashSet<String>,
    #[serde(default = "ClassifyConfig::default_min_tip_lamports")]
    pub min_tip_lamports: u64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            tip_addresses: Self::default_tip_addresses(),
            min_tip_lamports: Self::default_min_tip_lamports(),
        }
    }
}

impl ClassifyConfig {
    fn default_tip_addresses() -> HashSet<String> {
        KNOWN_TIP_ADDRESSES
            .iter()
            .map(|address| address.to_string())
            .collect()
    }

    const fn default_min_tip_lamports() -> u64 {
        1_000
    }
}
