use std::collections::BTreeMap;

use base64::Engine;

use crate::decoder::byte_reader::ByteReader;
use crate::decoder::idl::{Idl, IdlCompositeType, IdlType};
use crate::decoder::registry::{well_known_idl, IdlRegistry, NullRegistry};
use crate::types::{ArgValue, InstructionView};

/// Per-instruction decoder. Resolves an interface description for the
/// program id (built-in table first, then the injected registry) and parses
/// the payload into named arguments.
///
/// `decode` never fails: every unresolvable or malformed input comes back as
/// the `Raw` variant carrying the original payload, so callers handle one
/// result type with no separate error path.
pub struct InstructionDecoder<R = NullRegistry> {
    registry: R,
}

impl Default for InstructionDecoder<NullRegistry> {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionDecoder<NullRegistry> {
    pub fn new() -> Self {
        Self {
            registry: NullRegistry,
        }
    }
}

impl<R: IdlRegistry> InstructionDecoder<R> {
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    pub fn decode(&self, program_id: &str, raw_data: &str) -> InstructionView {
        match self.try_decode(program_id, raw_data) {
            Some(view) => view,
            None => {
                tracing::debug!(%program_id, "no usable interface description, passing payload through");
                InstructionView::Raw {
                    program_id: program_id.to_string(),
                    data: raw_data.to_string(),
                }
            }
        }
    }

    fn try_decode(&self, program_id: &str, raw_data: &str) -> Option<InstructionView> {
        let candidates = payload_candidates(raw_data);
        if candidates.is_empty() {
            return None;
        }
        if let Some(idl) = well_known_idl(program_id) {
            return candidates
                .iter()
                .find_map(|bytes| decode_with_idl(idl, program_id, bytes));
        }
        let idl = self.registry.resolve(program_id)?;
        candidates
            .iter()
            .find_map(|bytes| decode_with_idl(&idl, program_id, bytes))
    }
}

/// Payload bytes arrive base58- or base64-encoded depending on the wire
/// source, and the alphabets overlap: most base64 strings are also valid
/// base58, so which string decode succeeds says nothing about which
/// encoding was meant. Both interpretations are kept as candidates and the
/// one whose bytes match a known discriminator wins (base58 checked first).
fn payload_candidates(raw_data: &str) -> Vec<Vec<u8>> {
    if raw_data.is_empty() {
        return Vec::new();
    }
    let mut candidates = Vec::new();
    if let Ok(bytes) = bs58::decode(raw_data).into_vec() {
        candidates.push(bytes);
    }
    if let Ok(bytes) = base64::engine::general_purpose::STANDARD.decode(raw_data) {
        if !candidates.contains(&bytes) {
            candidates.push(bytes);
        }
    }
    candidates
}

fn decode_with_idl(idl: &Idl, program_id: &str, bytes: &[u8]) -> Option<InstructionView> {
    let instruction = idl.instruction_for(bytes)?;
    let mut reader = ByteReader::new(&bytes[instruction.discriminator.len()..]);

    let mut args = BTreeMap::new();
    for arg in &instruction.args {
        args.insert(arg.name.clone(), decode_value(&mut reader, &arg.ty)?);
    }

    Some(InstructionView::Decoded {
        program_id: program_id.to_string(),
        name: instruction.name.clone(),
        args,
    })
}

fn decode_value(reader: &mut ByteReader<'_>, ty: &IdlType) -> Option<ArgValue> {
    match ty {
        IdlType::Primitive(name) => decode_primitive(reader, name),
        IdlType::Composite(composite) => decode_composite(reader, composite),
    }
}

fn decode_primitive(reader: &mut ByteReader<'_>, name: &str) -> Option<ArgValue> {
    let value = match name {
        "u8" => ArgValue::Unsigned(reader.read_u8().ok()? as u64),
        "u16" => ArgValue::Unsigned(reader.read_u16().ok()? as u64),
        "u32" => ArgValue::Unsigned(reader.read_u32().ok()? as u64),
        "u64" => ArgValue::Unsigned(reader.read_u64().ok()?),
        "i8" => ArgValue::Signed(reader.read_i8().ok()? as i64),
        "i16" => ArgValue::Signed(reader.read_i16().ok()? as i64),
        "i32" => ArgValue::Signed(reader.read_i32().ok()? as i64),
        "i64" => ArgValue::Signed(reader.read_i64().ok()?),
        "u128" => {
            let bytes: [u8; 16] = reader.read_fixed_array(16).ok()?.try_into().ok()?;
            ArgValue::String(u128::from_le_bytes(bytes).to_string())
        }
        "i128" => {
            let bytes: [u8; 16] = reader.read_fixed_array(16).ok()?.try_into().ok()?;
            ArgValue::String(i128::from_le_bytes(bytes).to_string())
        }
        "bool" => ArgValue::Bool(reader.read_bool().ok()?),
        "string" => ArgValue::String(reader.read_string().ok()?),
        "pubkey" | "publicKey" => ArgValue::String(reader.read_pubkey().ok()?),
        "bytes" => {
            let length = reader.read_u32().ok()? as usize;
            ArgValue::Bytes(reader.read_fixed_array(length).ok()?)
        }
        _ => return None,
    };
    Some(value)
}

fn decode_composite(reader: &mut ByteReader<'_>, ty: &IdlCompositeType) -> Option<ArgValue> {
    match ty {
        IdlCompositeType::Option(inner) => {
            if reader.read_bool().ok()? {
                decode_value(reader, inner)
            } else {
                Some(ArgValue::Struct(BTreeMap::new()))
            }
        }
        IdlCompositeType::Vec(inner) => {
            let length = reader.read_u32().ok()? as usize;
            let mut items = Vec::with_capacity(length.min(1024));
            for _ in 0..length {
                items.push(decode_value(reader, inner)?);
            }
            Some(ArgValue::List(items))
        }
        IdlCompositeType::Array(inner, length) => {
            let mut items = Vec::with_capacity(*length);
            for _ in 0..*length {
                items.push(decode_value(reader, inner)?);
            }
            Some(ArgValue::List(items))
        }
        // Nested user-defined layouts need type definitions this decoder
        // does not resolve; degrade to raw passthrough.
        IdlCompositeType::Defined(_) => None,
    }
}
