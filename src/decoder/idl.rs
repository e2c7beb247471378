use serde::{Deserialize, Serialize};

/// Interface description for one program: names and byte layouts for its
/// instructions. The subset of the Anchor IDL JSON shape this decoder needs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idl {
    #[serde(default)]
    pub address: Option<String>,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub instructions: Vec<IdlInstruction>,
}

/// One instruction layout: a discriminator prefix followed by its args in
/// declaration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdlInstruction {
    pub name: String,
    pub discriminator: Vec<u8>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IdlType,
}

/// Argument type. Primitive names come through as bare strings in IDL JSON;
/// composite shapes are objects.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", untagged)]
pub enum IdlType {
    Primitive(String),
    Composite(IdlCompositeType),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum IdlCompositeType {
    Option(Box<IdlType>),
    Vec(Box<IdlType>),
    Array(Box<IdlType>, usize),
    Defined(String),
}

impl IdlType {
    pub fn primitive(name: &str) -> Self {
        IdlType::Primitive(name.to_string())
    }
}

impl Idl {
    /// Find the instruction whose discriminator is a prefix of `data`.
    pub fn instruction_for(&self, data: &[u8]) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|instruction| {
            !instruction.discriminator.is_empty()
                && data.len() >= instruction.discriminator.len()
                && data[..instruction.discriminator.len()] == instruction.discriminator[..]
        })
    }
}
