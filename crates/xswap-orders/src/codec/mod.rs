//! # Codec Module
//!
//! Transport representation of orders and the conversions to and from it.

pub mod alternative;
pub mod serializer;
pub mod transport;

pub use alternative::{serialize_alternative, AlternativeSerializedOrder};
pub use serializer::{
    deserialize, deserialize_best_effort, from_text, serialize, to_text, Fidelity,
    Reconstruction, SecretSource, SerializeDiagnostic, SerializeOverrides, Serialized,
};
pub use transport::{HashLockData, OriginalParams, SerializedOrder};
