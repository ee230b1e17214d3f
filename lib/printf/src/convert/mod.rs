//! Converters: each renders one argument through the context's sink.

mod number;
mod pointer;
mod string;

pub use number::{format_decimal, format_hex};
pub use pointer::format_pointer;
pub use string::{format_char, format_str};
