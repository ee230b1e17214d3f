use crate::{
    context::{FormatContext, FormatFlags},
    sink::Sink,
};

/// `%s`. The string ends at its first NUL; a precision caps how many bytes
/// are printed.
pub fn format_str<S: Sink + ?Sized>(ctx: &mut FormatContext<'_, S>, s: &[u8]) {
    let mut len = s.iter().position(|&b| b == 0).unwrap_or(s.len());
    if ctx.is(FormatFlags::PRECISION) {
        len = len.min(ctx.precision);
    }
    let pad = ctx.width.saturating_sub(len);
    let left = ctx.is(FormatFlags::LEFT_JUSTIFIED);

    if !left {
        ctx.pad(b' ', pad);
    }
    for &c in &s[..len] {
        ctx.putc(c);
    }
    if left {
        ctx.pad(b' ', pad);
    }
}

/// `%c`: a one-byte field. The byte is emitted even when it is NUL.
pub fn format_char<S: Sink + ?Sized>(ctx: &mut FormatContext<'_, S>, c: u8) {
    let pad = ctx.width.saturating_sub(1);
    let left = ctx.is(FormatFlags::LEFT_JUSTIFIED);

    if !left {
        ctx.pad(b' ', pad);
    }
    ctx.putc(c);
    if left {
        ctx.pad(b' ', pad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;

    fn render(flags: FormatFlags, width: usize, precision: usize, s: &[u8]) -> Vec<u8> {
        let mut buf = [0u8; 64];
        let mut sink = BufferSink::unbounded(&mut buf);
        let mut ctx = FormatContext::new(&mut sink);
        ctx.flags = flags;
        ctx.width = width;
        ctx.precision = precision;
        format_str(&mut ctx, s);
        let len = sink.finish();
        buf[..len].to_vec()
    }

    #[test]
    fn test_str_plain_and_nul_terminated() {
        assert_eq!(render(FormatFlags::empty(), 0, 0, b"hello"), b"hello");
        assert_eq!(render(FormatFlags::empty(), 0, 0, b"he\0llo"), b"he");
        assert_eq!(render(FormatFlags::empty(), 0, 0, b""), b"");
    }

    #[test]
    fn test_str_precision_caps() {
        assert_eq!(render(FormatFlags::PRECISION, 0, 3, b"hello"), b"hel");
        assert_eq!(render(FormatFlags::PRECISION, 0, 0, b"hello"), b"");
        assert_eq!(render(FormatFlags::PRECISION, 0, 9, b"hello"), b"hello");
    }

    #[test]
    fn test_str_padding() {
        assert_eq!(render(FormatFlags::MIN_WIDTH, 7, 0, b"abc"), b"    abc");
        assert_eq!(
            render(FormatFlags::LEFT_JUSTIFIED | FormatFlags::MIN_WIDTH, 7, 0, b"abc"),
            b"abc    "
        );
        // width is compared against the clamped length
        assert_eq!(
            render(FormatFlags::PRECISION | FormatFlags::MIN_WIDTH, 4, 2, b"abc"),
            b"  ab"
        );
    }

    #[test]
    fn test_char_padding_and_nul() {
        let mut buf = [0xffu8; 8];
        let mut sink = BufferSink::unbounded(&mut buf);
        let mut ctx = FormatContext::new(&mut sink);
        ctx.width = 3;
        format_char(&mut ctx, b'A');
        ctx.flags = FormatFlags::LEFT_JUSTIFIED;
        ctx.width = 2;
        format_char(&mut ctx, 0);
        assert_eq!(ctx.total(), 5);
        sink.finish();
        assert_eq!(&buf[..6], b"  A\0 \0");
    }
}
