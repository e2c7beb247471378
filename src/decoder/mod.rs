mod byte_reader;
pub mod idl;
mod instruction;
mod registry;

pub use byte_reader::{ByteReader, ByteReaderError};
pub use instruction::InstructionDecoder;
pub use registry::{well_known_idl, IdlRegistry, NullRegistry};
