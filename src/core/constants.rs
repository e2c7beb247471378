pub mod programs {
    pub const SYSTEM: &str = "11111111111111111111111111111111";
    pub const SPL_TOKEN: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
    pub const SPL_TOKEN_2022: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";
}

/// Known block-production tip collector addresses. Used as the default tip
/// address set; callers may override through `ClassifyConfig`.
pub const KNOWN_TIP_ADDRESSES: &[&str] = &[
    "96gYZGLnJYVFmbjzopPSU6QiEV5fGqZNyN9nmNhvrZU5",
    "HFqU5x63VTqvQss8hp11i4wVV8bD44PvwucfZ2bU7gRe",
    "Cw8CFyM9FkoMi7K7Crf6HNQqf4uEMzpKw6QNghXLvLkY",
    "ADaUMid9yfUytqMBgopwjb2DTLSokTSzL1zt6iGPaS49",
    "DfXygSm4jCyNCybVYYK6DwvWqjKee8pbDmJGcLWNDXjh",
    "ADuUkR4vqLUMWXxW9gh6D6L8pMSawimctcNZ5pGwDcEt",
    "DttWaMuVvTiduZRnguLF7jNxTgiMBZ1hyAumKUiL2KRL",
    "3AVi9Tg9Uo68tJfuvoKvqKNWKkC5wPdSSdeBnizKZ6jT",
];

pub mod token_symbols {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
    pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

    static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(SOL_MINT, "SOL");
        map.insert(USDC_MINT, "USDC");
        map.insert(USDT_MINT, "USDT");
        map
    });

    /// Symbol for a well-known mint, or a shortened mint for everything else.
    pub fn symbol(mint: &str) -> String {
        match SYMBOLS.get(mint) {
            Some(symbol) => (*symbol).to_string(),
            None => mint.chars().take(4).collect(),
        }
    }

    /// Base-unit decimals for well-known mints.
    pub fn decimals(mint: &str) -> Option<u32> {
        match mint {
            SOL_MINT => Some(9),
            USDC_MINT | USDT_MINT => Some(6),
            _ => None,
        }
    }
}

/// Render a base-unit token amount as a decimal string. Unknown mints have
/// unknown decimals, so their amounts stay in base units.
pub fn format_token_amount(amount: u64, mint: &str) -> String {
    match token_symbols::decimals(mint) {
        Some(decimals) => {
            let divisor = 10u64.pow(decimals);
            let whole = amount / divisor;
            let frac = amount % divisor;
            if frac == 0 {
                whole.to_string()
            } else {
                let frac = format!("{frac:0width$}", width = decimals as usize);
                format!("{whole}.{}", frac.trim_end_matches('0'))
            }
        }
        None => amount.to_string(),
    }
}

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Render lamports as a decimal SOL amount without trailing zeros.
pub fn format_lamports(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:09}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
