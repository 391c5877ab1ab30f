use ov_core::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgError {
    /// Two consecutive polygon points differ in both coordinates (or in
    /// neither), so no single `h`/`v` command can connect them.
    #[error("non-orthogonal segment {from} -> {to}")]
    NonOrthogonalSegment { from: Point, to: Point },
    #[error("unexpected path command {found:?} at byte {offset}")]
    UnexpectedCommand { found: char, offset: usize },
    #[error("invalid number at byte {offset}")]
    InvalidNumber { offset: usize },
    #[error("path segment before any move-to at byte {offset}")]
    MissingMoveTo { offset: usize },
}
