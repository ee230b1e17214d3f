use crate::{
    args::ArgList,
    context::{FormatContext, FormatFlags},
    convert::{format_char, format_decimal, format_hex, format_pointer, format_str},
    parser::{Conversion, Directives, Segment, Spec},
    sink::Sink,
};

/// Render `fmt` with `args` into `sink`.
///
/// Literal bytes go straight to the sink; each directive consumes one
/// argument and is handed to its converter. Returns the number of bytes the
/// output has, whether or not the sink kept them all.
pub fn format<S: Sink + ?Sized>(sink: &mut S, fmt: &[u8], args: &mut ArgList<'_, '_>) -> usize {
    let mut ctx = FormatContext::new(sink);

    for segment in Directives::new(fmt) {
        match segment {
            Segment::Literal(text) => {
                for &c in text {
                    ctx.putc(c);
                }
            }
            Segment::Directive(spec) => convert(&mut ctx, &spec, args),
        }
    }

    ctx.total()
}

fn convert<S: Sink + ?Sized>(
    ctx: &mut FormatContext<'_, S>,
    spec: &Spec,
    args: &mut ArgList<'_, '_>,
) {
    ctx.load(spec);
    let long = ctx.is(FormatFlags::LONG);

    match spec.conversion {
        Conversion::Char => format_char(ctx, args.next_char()),
        Conversion::Signed => {
            let value = args.next_int(long);
            if value < 0 {
                ctx.flags |= FormatFlags::NEGATIVE;
            }
            format_decimal(ctx, value.unsigned_abs());
        }
        Conversion::Pointer => format_pointer(ctx, args.next_ptr()),
        Conversion::Str => format_str(ctx, args.next_str()),
        Conversion::Hex => format_hex(ctx, args.next_uint(long)),
    }
}
