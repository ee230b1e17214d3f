//! Format string scanning.
//!
//! Directive syntax: `%[0|-][width][.precision][l]conv` with
//! `conv` one of `c d i p s x X`, plus `%%` for a literal percent sign.
//! At most one flag character is read, so zero padding and left
//! justification never meet in one directive.

use config::fmt::MAX_FIELD_WIDTH;

use crate::context::FormatFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`
    Char,
    /// `d`, `i`
    Signed,
    /// `p`
    Pointer,
    /// `s`
    Str,
    /// `x`, `X`
    Hex,
}

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub flags: FormatFlags,
    /// Saturates at [`MAX_FIELD_WIDTH`].
    pub width: usize,
    pub precision: usize,
    pub conversion: Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'f> {
    /// Bytes to emit verbatim.
    Literal(&'f [u8]),
    Directive(Spec),
}

fn parse_decimal(fmt: &[u8], pos: &mut usize) -> usize {
    let mut value = 0usize;
    while let Some(d) = fmt.get(*pos).filter(|d| d.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add((d - b'0') as usize);
        *pos += 1;
    }
    value
}

/// Parse one directive. `fmt` starts right after the `%`.
///
/// Returns the directive, or `None` if the conversion character is missing
/// or unknown, together with the number of bytes examined (including the
/// conversion character when there is one).
pub fn parse_spec(fmt: &[u8]) -> (Option<Spec>, usize) {
    let mut pos = 0;
    let mut flags = FormatFlags::empty();

    match fmt.first() {
        Some(b'0') => {
            flags |= FormatFlags::ZERO_PADDED;
            pos += 1;
        }
        Some(b'-') => {
            flags |= FormatFlags::LEFT_JUSTIFIED;
            pos += 1;
        }
        _ => {}
    }

    let width = parse_decimal(fmt, &mut pos).min(MAX_FIELD_WIDTH);
    if width != 0 {
        flags |= FormatFlags::MIN_WIDTH;
    }

    let mut precision = 0;
    if fmt.get(pos) == Some(&b'.') {
        pos += 1;
        precision = parse_decimal(fmt, &mut pos);
        flags |= FormatFlags::PRECISION;
    }

    if fmt.get(pos) == Some(&b'l') {
        pos += 1;
        flags |= FormatFlags::LONG;
    }

    let Some(&conv) = fmt.get(pos) else {
        return (None, pos);
    };
    pos += 1;

    let conversion = match conv {
        b'c' => Conversion::Char,
        b'd' | b'i' => Conversion::Signed,
        b'p' => Conversion::Pointer,
        b's' => Conversion::Str,
        b'X' => {
            flags |= FormatFlags::UPPERCASE;
            Conversion::Hex
        }
        b'x' => Conversion::Hex,
        _ => return (None, pos),
    };

    (
        Some(Spec {
            flags,
            width,
            precision,
            conversion,
        }),
        pos,
    )
}

/// Lazily splits a format string into literal runs and directives.
///
/// The string ends at its first NUL byte, if any. A directive with an unknown
/// or missing conversion character comes back as a literal holding its own
/// text, so `"%q"` prints `%q` and consumes no argument.
#[derive(Debug, Clone)]
pub struct Directives<'f> {
    fmt: &'f [u8],
    pos: usize,
}

impl<'f> Directives<'f> {
    pub fn new(fmt: &'f [u8]) -> Self {
        let end = fmt.iter().position(|&b| b == 0).unwrap_or(fmt.len());
        Self {
            fmt: &fmt[..end],
            pos: 0,
        }
    }
}

impl<'f> Iterator for Directives<'f> {
    type Item = Segment<'f>;

    fn next(&mut self) -> Option<Segment<'f>> {
        let fmt = self.fmt;
        let start = self.pos;
        if start >= fmt.len() {
            return None;
        }

        if fmt[start] != b'%' {
            let len = fmt[start..]
                .iter()
                .position(|&b| b == b'%')
                .unwrap_or(fmt.len() - start);
            self.pos += len;
            return Some(Segment::Literal(&fmt[start..start + len]));
        }

        // `%%`, or a `%` ending the string
        if fmt.get(start + 1).is_none_or(|&b| b == b'%') {
            self.pos = (start + 2).min(fmt.len());
            return Some(Segment::Literal(&fmt[start..start + 1]));
        }

        let (spec, used) = parse_spec(&fmt[start + 1..]);
        self.pos = start + 1 + used;
        Some(match spec {
            Some(spec) => Segment::Directive(spec),
            None => Segment::Literal(&fmt[start..self.pos]),
        })
    }
}
