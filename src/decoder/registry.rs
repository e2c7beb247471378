use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::core::constants::programs;
use crate::decoder::idl::{Idl, IdlField, IdlInstruction, IdlType};

/// Resolution seam for interface descriptions the crate does not ship.
/// Implementations are owned by the caller (typically a client for an IDL
/// registry service); resolution must be blocking-safe and idempotent. The
/// decoder does not cache results — repeated lookups for the same program id
/// are the caller's to memoize, which keeps staleness visible.
pub trait IdlRegistry {
    fn resolve(&self, program_id: &str) -> Option<Idl>;
}

/// Registry that resolves nothing. The default when no external registry is
/// injected; well-known programs still decode through the built-in table.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRegistry;

impl IdlRegistry for NullRegistry {
    fn resolve(&self, _program_id: &str) -> Option<Idl> {
        None
    }
}

fn field(name: &str, ty: &str) -> IdlField {
    IdlField {
        name: name.to_string(),
        ty: IdlType::primitive(ty),
    }
}

fn system_program_idl() -> Idl {
    // System program instructions carry a 4-byte little-endian index.
    Idl {
        address: Some(programs::SYSTEM.to_string()),
        name: "system".to_string(),
        version: None,
        instructions: vec![
            IdlInstruction {
                name: "createAccount".to_string(),
                discriminator: vec![0, 0, 0, 0],
                args: vec![
                    field("lamports", "u64"),
                    field("space", "u64"),
                    field("owner", "pubkey"),
                ],
            },
            IdlInstruction {
                name: "assign".to_string(),
                discriminator: vec![1, 0, 0, 0],
                args: vec![field("owner", "pubkey")],
            },
            IdlInstruction {
                name: "transfer".to_string(),
                discriminator: vec![2, 0, 0, 0],
                args: vec![field("lamports", "u64")],
            },
        ],
    }
}

fn spl_token_idl() -> Idl {
    // SPL token instructions carry a single-byte tag.
    Idl {
        address: Some(programs::SPL_TOKEN.to_string()),
        name: "splToken".to_string(),
        version: None,
        instructions: vec![
            IdlInstruction {
                name: "transfer".to_string(),
                discriminator: vec![3],
                args: vec![field("amount", "u64")],
            },
            IdlInstruction {
                name: "approve".to_string(),
                discriminator: vec![4],
                args: vec![field("amount", "u64")],
            },
            IdlInstruction {
                name: "mintTo".to_string(),
                discriminator: vec![7],
                args: vec![field("amount", "u64")],
            },
            IdlInstruction {
                name: "burn".to_string(),
                discriminator: vec![8],
                args: vec![field("amount", "u64")],
            },
            IdlInstruction {
                name: "transferChecked".to_string(),
                discriminator: vec![12],
                args: vec![field("amount", "u64"), field("decimals", "u8")],
            },
        ],
    }
}

static WELL_KNOWN_IDLS: Lazy<FxHashMap<&'static str, Idl>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(programs::SYSTEM, system_program_idl());
    map.insert(programs::SPL_TOKEN, spl_token_idl());
    map.insert(programs::SPL_TOKEN_2022, spl_token_idl());
    map
});

/// Constant-time lookup of the built-in interface descriptions.
pub fn well_known_idl(program_id: &str) -> Option<&'static Idl> {
    WELL_KNOWN_IDLS.get(program_id)
}
