//! Argument lists.
//!
//! A call's arguments are a caller-built slice of [`Arg`] values walked by an
//! [`ArgList`] cursor, one argument per conversion. Nothing checks that the
//! format string and the arguments agree; a conversion that meets the wrong
//! variant reinterprets it the way a C varargs read would, and a conversion
//! that runs past the end reads zero or the empty string.

/// One formatting argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Char(u8),
    /// Bytes up to the first NUL (or the end of the slice) are the string.
    Str(&'a [u8]),
    Ptr(usize),
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(v: $ty) -> Self {
                    Arg::$variant(v as _)
                }
            }
        )*
    };
}

impl_from!(Int: i8, i16, i32, i64, isize);
impl_from!(Uint: u16, u32, u64, usize);
impl_from!(Char: u8);

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(if c.is_ascii() { c as u8 } else { b'?' })
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(s)
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(p: *const T) -> Self {
        Arg::Ptr(p as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(p: *mut T) -> Self {
        Arg::Ptr(p as usize)
    }
}

/// Forward-only cursor over a call's arguments.
#[derive(Debug, Clone)]
pub struct ArgList<'a, 'b> {
    args: core::slice::Iter<'b, Arg<'a>>,
}

impl<'a, 'b> ArgList<'a, 'b> {
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self { args: args.iter() }
    }

    /// Arguments not consumed yet.
    pub fn remaining(&self) -> usize {
        self.args.len()
    }

    fn next(&mut self) -> Option<Arg<'a>> {
        self.args.next().copied()
    }

    /// `%d`: 64-bit when `long`, otherwise truncated to `i32`.
    pub fn next_int(&mut self, long: bool) -> i64 {
        let v = match self.next() {
            Some(Arg::Int(v)) => v,
            Some(Arg::Uint(v)) => v as i64,
            Some(Arg::Char(c)) => c as i64,
            Some(Arg::Ptr(p)) => p as i64,
            Some(Arg::Str(_)) | None => 0,
        };
        if long { v } else { v as i32 as i64 }
    }

    /// `%x`: 64-bit when `long`, otherwise truncated to `u32`.
    pub fn next_uint(&mut self, long: bool) -> u64 {
        let v = match self.next() {
            Some(Arg::Int(v)) => v as u64,
            Some(Arg::Uint(v)) => v,
            Some(Arg::Char(c)) => c as u64,
            Some(Arg::Ptr(p)) => p as u64,
            Some(Arg::Str(_)) | None => 0,
        };
        if long { v } else { v as u32 as u64 }
    }

    pub fn next_char(&mut self) -> u8 {
        match self.next() {
            Some(Arg::Char(c)) => c,
            Some(Arg::Int(v)) => v as u8,
            Some(Arg::Uint(v)) => v as u8,
            Some(Arg::Ptr(p)) => p as u8,
            Some(Arg::Str(_)) | None => 0,
        }
    }

    pub fn next_str(&mut self) -> &'a [u8] {
        match self.next() {
            Some(Arg::Str(s)) => s,
            _ => b"",
        }
    }

    pub fn next_ptr(&mut self) -> usize {
        match self.next() {
            Some(Arg::Ptr(p)) => p,
            Some(Arg::Int(v)) => v as usize,
            Some(Arg::Uint(v)) => v as usize,
            Some(Arg::Char(c)) => c as usize,
            Some(Arg::Str(s)) => s.as_ptr() as usize,
            None => 0,
        }
    }
}
