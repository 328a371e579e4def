use thiserror::Error;

/// Returned by [`checked_clamp`](crate::cmp::checked_clamp) when the bounds are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClampError {
    #[error("clamp bounds are inverted: max compares less than min")]
    InvertedBounds,
}
