//! Error type for encoding protocol values and parsing descriptors.

/// Errors that can occur while packing protocol values or reading descriptors.
///
/// Decoding a single protocol byte never fails; only encoding values that do not fit their
/// field, and parsing whole descriptors from too few bytes, do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value passed to an encoder does not fit in the bits of the field it is packed into.
    #[error("{field} {value} does not fit in its field (mask 0x{mask:02x})")]
    InvalidArgument {
        field: &'static str,
        value: u8,
        mask: u8,
    },

    /// A descriptor could not be read from the supplied bytes.
    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(String),
}

impl From<binrw::Error> for Error {
    fn from(e: binrw::Error) -> Self {
        Error::MalformedDescriptor(e.to_string())
    }
}

/// Convenience alias used throughout this crate.
pub type UsbResult<T> = Result<T, Error>;
