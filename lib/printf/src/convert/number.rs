use config::fmt::{MAX_FIELD_WIDTH, SCRATCH_LEN};

use crate::{
    context::{FormatContext, FormatFlags},
    sink::Sink,
};

/// Digits are written right to left; the returned index is the first one.
fn render_decimal(mut value: u64, scratch: &mut [u8; SCRATCH_LEN]) -> usize {
    let mut p = SCRATCH_LEN;
    loop {
        p -= 1;
        scratch[p] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            return p;
        }
    }
}

fn render_hex(mut value: u64, uppercase: bool, scratch: &mut [u8; SCRATCH_LEN]) -> usize {
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut p = SCRATCH_LEN;
    loop {
        let nibble = (value & 0xf) as u8;
        p -= 1;
        scratch[p] = if nibble < 10 {
            b'0' + nibble
        } else {
            alpha + nibble - 10
        };
        value >>= 4;
        if value == 0 {
            return p;
        }
    }
}

/// Prepend `c` until `scratch[*p..]` is `target` bytes long.
fn fill(scratch: &mut [u8; SCRATCH_LEN], p: &mut usize, target: usize, c: u8) {
    while SCRATCH_LEN - *p < target {
        *p -= 1;
        scratch[*p] = c;
    }
}

/// Pad the digits at `scratch[p..]` outwards and emit the field.
///
/// Order: precision zeros, zero padding up to the width (leaving a slot for
/// the sign), the sign, then leading spaces unless left-justified. Width and
/// numeric precision are both capped at `MAX_FIELD_WIDTH`, so the assembled
/// field always fits in the scratch.
fn emit_field<S: Sink + ?Sized>(
    ctx: &mut FormatContext<'_, S>,
    scratch: &mut [u8; SCRATCH_LEN],
    mut p: usize,
) {
    let width = ctx.width.min(MAX_FIELD_WIDTH);
    let negative = ctx.is(FormatFlags::NEGATIVE);
    let left = ctx.is(FormatFlags::LEFT_JUSTIFIED);

    if ctx.is(FormatFlags::PRECISION) {
        fill(scratch, &mut p, ctx.precision.min(MAX_FIELD_WIDTH), b'0');
    }
    if ctx.is(FormatFlags::ZERO_PADDED) {
        fill(scratch, &mut p, width.saturating_sub(negative as usize), b'0');
    }
    if negative {
        p -= 1;
        scratch[p] = b'-';
    }
    if !left {
        fill(scratch, &mut p, width, b' ');
    }

    let len = SCRATCH_LEN - p;
    for &c in &scratch[p..] {
        ctx.putc(c);
    }
    if left {
        ctx.pad(b' ', width.saturating_sub(len));
    }
}

/// `%d`: `magnitude` is the absolute value; the caller sets
/// [`FormatFlags::NEGATIVE`] for negative arguments.
pub fn format_decimal<S: Sink + ?Sized>(ctx: &mut FormatContext<'_, S>, magnitude: u64) {
    let mut scratch = [0u8; SCRATCH_LEN];
    let p = render_decimal(magnitude, &mut scratch);
    emit_field(ctx, &mut scratch, p);
}

/// `%x` / `%X`. Always unsigned.
pub fn format_hex<S: Sink + ?Sized>(ctx: &mut FormatContext<'_, S>, value: u64) {
    let mut scratch = [0u8; SCRATCH_LEN];
    let p = render_hex(value, ctx.is(FormatFlags::UPPERCASE), &mut scratch);
    emit_field(ctx, &mut scratch, p);
}
