use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    /// The value is of a kind MessagePack scalars cannot carry (e.g. a container).
    #[error("unsupported value kind for msgpack: {kind}")]
    UnsupportedType { kind: &'static str },
    /// A str/bin payload is longer than the 32-bit length class.
    #[error("{kind} payload of {len} bytes exceeds the msgpack 32-bit length limit")]
    LengthOverflow { kind: &'static str, len: usize },
}
