//! Limits of the formatting engine.
//!
//! Every numeric field is assembled in a stack scratch of `SCRATCH_LEN`
//! bytes, so widths and numeric precisions are capped at `MAX_FIELD_WIDTH`
//! (one byte stays free for the sign).

/// Size of the per-conversion scratch buffer.
pub const SCRATCH_LEN: usize = 64;

/// Largest field width (and numeric precision) a directive can request.
/// Larger values in a format string saturate to this.
pub const MAX_FIELD_WIDTH: usize = SCRATCH_LEN - 1;

/// Hex digits emitted for `%p`.
pub const POINTER_DIGITS: usize = 8;
