/// Errors reported by the checked filter operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An intermediate value of the update left the `i32` range.
    #[error("Arithmetic overflow")]
    Overflow,
}
