use thiserror::Error;

/// Error returned by the quantizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// No samples were supplied.
    #[error("cannot quantize an empty sample set")]
    EmptyInput,

    /// The requested bisection depth would produce an unreasonably large palette.
    #[error("quantization depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge {
        /// Requested depth
        depth: u32,
        /// Largest accepted depth
        max: u32,
    },
}
