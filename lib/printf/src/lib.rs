//! printf-style formatted output for code with no OS, no heap and no std.
//!
//! A call renders a format string and an argument list either to the
//! installed console (a [`CharDevice`](driver::CharDevice), one byte at a
//! time) or into a caller-supplied byte buffer. Both return how many bytes
//! the full output has, even when a buffer was too small to hold it.
//!
//! ```ignore
//! let mut buf = [0u8; 4];
//! let n = printf::snprintf!(&mut buf, 4, "%d", 12345);
//! assert_eq!((&buf, n), (b"123\0", 5));
//! ```
//!
//! Supported directives: `%[0|-][width][.precision][l](c|d|i|p|s|x|X)` and
//! `%%`. Anything else after a `%` is printed as written.

#![cfg_attr(not(test), no_std)]

pub mod args;
pub mod console;
pub mod context;
pub mod convert;
pub mod error;
pub mod format;
pub mod parser;
pub mod sink;

pub use args::{Arg, ArgList};
pub use console::{Console, console, install, printf, try_vprintf, vprintf};
pub use error::{PrintError, PrintResult};
pub use format::format;
use sink::BufferSink;

/// Render into `buf`, storing at most `size - 1` bytes plus a NUL (and never
/// more than `buf` holds). Returns the untruncated length.
pub fn vsnprintf<F: AsRef<[u8]> + ?Sized>(
    buf: &mut [u8],
    size: usize,
    fmt: &F,
    args: &mut ArgList<'_, '_>,
) -> usize {
    let mut sink = BufferSink::new(buf, size);
    let total = format(&mut sink, fmt.as_ref(), args);
    sink.finish();
    total
}

pub fn snprintf<F: AsRef<[u8]> + ?Sized>(
    buf: &mut [u8],
    size: usize,
    fmt: &F,
    args: &[Arg<'_>],
) -> usize {
    vsnprintf(buf, size, fmt, &mut ArgList::new(args))
}

/// [`vsnprintf`] bounded only by the length of `buf`.
pub fn vsprintf<F: AsRef<[u8]> + ?Sized>(
    buf: &mut [u8],
    fmt: &F,
    args: &mut ArgList<'_, '_>,
) -> usize {
    let mut sink = BufferSink::unbounded(buf);
    let total = format(&mut sink, fmt.as_ref(), args);
    sink.finish();
    total
}

pub fn sprintf<F: AsRef<[u8]> + ?Sized>(buf: &mut [u8], fmt: &F, args: &[Arg<'_>]) -> usize {
    vsprintf(buf, fmt, &mut ArgList::new(args))
}

/// Print to the installed console.
#[macro_export]
macro_rules! printf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf($fmt, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! sprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf($buf, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $size:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::snprintf($buf, $size, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}
