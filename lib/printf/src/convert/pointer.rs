use config::fmt::POINTER_DIGITS;

use super::format_hex;
use crate::{
    context::{FormatContext, FormatFlags},
    sink::Sink,
};

const POINTER_MASK: u64 = (1u64 << (POINTER_DIGITS * 4)) - 1;

/// `%p`: `0x` and exactly eight zero-padded lowercase hex digits. Address
/// bits above the low 32 are not printed. Whatever flags and width the
/// directive carried are replaced.
pub fn format_pointer<S: Sink + ?Sized>(ctx: &mut FormatContext<'_, S>, addr: usize) {
    ctx.flags = FormatFlags::ZERO_PADDED | FormatFlags::MIN_WIDTH;
    ctx.width = POINTER_DIGITS;
    ctx.precision = 0;

    ctx.putc(b'0');
    ctx.putc(b'x');
    format_hex(ctx, addr as u64 & POINTER_MASK);
}
