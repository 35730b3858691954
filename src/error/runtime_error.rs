#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// The sum does not fit in a `u64`.
    #[error("Integer overflow while trying to compute {left} + {right}.")]
    Overflow {
        /// The left operand.
        left:  u64,
        /// The right operand.
        right: u64,
    },
}
