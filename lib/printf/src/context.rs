//! Per-call formatting state.

use bitflags::bitflags;

use crate::{parser::Spec, sink::Sink};

bitflags! {
    /// Options collected from one directive, plus the sign of the value
    /// being converted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u8 {
        /// `.precision` was given
        const PRECISION = 1 << 0;
        /// `%X`
        const UPPERCASE = 1 << 1;
        /// `l` length modifier
        const LONG = 1 << 2;
        /// set by the dispatcher for negative `%d` values
        const NEGATIVE = 1 << 3;
        /// a non-zero width was given
        const MIN_WIDTH = 1 << 4;
        /// `0` flag
        const ZERO_PADDED = 1 << 5;
        /// `-` flag
        const LEFT_JUSTIFIED = 1 << 6;
    }
}

/// State of one top-level call: the bound sink, the logical output count and
/// the options of the directive being converted.
///
/// Every byte a converter produces goes through [`FormatContext::putc`], which
/// counts it even when the sink drops it.
pub struct FormatContext<'s, S: Sink + ?Sized> {
    pub flags: FormatFlags,
    pub width: usize,
    pub precision: usize,
    total: usize,
    sink: &'s mut S,
}

impl<'s, S: Sink + ?Sized> FormatContext<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self {
            flags: FormatFlags::empty(),
            width: 0,
            precision: 0,
            total: 0,
            sink,
        }
    }

    /// Take over the options of the next directive.
    pub fn load(&mut self, spec: &Spec) {
        self.flags = spec.flags;
        self.width = spec.width;
        self.precision = spec.precision;
    }

    #[inline]
    pub fn putc(&mut self, c: u8) {
        self.total += 1;
        self.sink.put(c);
    }

    pub fn pad(&mut self, c: u8, count: usize) {
        for _ in 0..count {
            self.putc(c);
        }
    }

    pub fn is(&self, flag: FormatFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Characters the output would contain on an unbounded sink.
    pub fn total(&self) -> usize {
        self.total
    }
}
