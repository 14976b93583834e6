use thiserror::Error;

/// Errors returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Reading or writing a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An argument was rejected: wrong pixel format, bad sample rate,
    /// unsupported storage, zero dimensions or mismatched sizes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A buffer length is not a multiple of the element size.
    #[error("length {len} is not a multiple of {multiple}")]
    OutOfBounds {
        /// Length that was passed in.
        len: usize,
        /// Multiple the length has to be.
        multiple: usize,
    },

    /// A buffer of this many bytes could not be reserved.
    #[error("could not allocate {0} bytes")]
    Allocation(usize),

    /// A configuration value is malformed.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, BridgeError>;
