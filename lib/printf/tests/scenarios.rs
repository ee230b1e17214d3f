//! End-to-end behaviour of the buffer entry points.

use printf::{Arg, snprintf, sprintf};

fn render(fmt: &str, args: &[Arg<'_>]) -> (String, usize) {
    let mut buf = [0u8; 256];
    let n = sprintf(&mut buf, fmt, args);
    // `%c` may emit NUL bytes, so trust the count rather than the terminator
    let len = n.min(buf.len() - 1);
    (String::from_utf8(buf[..len].to_vec()).unwrap(), n)
}

fn one(fmt: &str, arg: Arg<'_>) -> String {
    render(fmt, &[arg]).0
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(one("%5d", Arg::from(42)), "   42");
    assert_eq!(one("%-5d", Arg::from(42)), "42   ");
    assert_eq!(one("%05d", Arg::from(-7)), "-0007");
    assert_eq!(one("%x", Arg::from(255)), "ff");
    assert_eq!(one("%X", Arg::from(255)), "FF");
    assert_eq!(one("%.3s", Arg::from("hello")), "hel");

    let mut buf = [0xaau8; 4];
    let n = snprintf!(&mut buf, 4, "%d", 12345);
    assert_eq!(&buf, b"123\0");
    assert_eq!(n, 5);
}

#[test]
fn test_zero_renders_single_digit() {
    assert_eq!(one("%d", Arg::from(0)), "0");
    assert_eq!(one("%x", Arg::from(0)), "0");
    assert_eq!(one("%.4d", Arg::from(0)), "0000");
}

#[test]
fn test_field_length_at_least_width() {
    let values = [
        Arg::from(0),
        Arg::from(-1),
        Arg::from(123456),
        Arg::from("abc"),
        Arg::from(b'z'),
    ];
    let convs = ["d", "x", "s", "c", "i"];
    for width in [0usize, 1, 3, 8, 20] {
        for flag in ["", "-", "0"] {
            for conv in convs {
                for &v in &values {
                    let fmt = format!("%{flag}{width}{conv}");
                    let (s, n) = render(&fmt, &[v]);
                    assert!(s.len() >= width, "{fmt} -> {s:?}");
                    assert_eq!(s.len(), n);
                }
            }
        }
    }
}

#[test]
fn test_left_justify_never_zero_pads() {
    for v in [-5, 0, 5, 1234] {
        let s = one("%-08d", Arg::from(v));
        assert_eq!(s.len(), 8);
        assert_eq!(s.trim_end(), v.to_string());
    }
}

#[test]
fn test_pointer_shape_ignores_width_and_flags() {
    for fmt in ["%p", "%20p", "%-3p", "%012p", "%.2p"] {
        let s = one(fmt, Arg::Ptr(0xabc));
        assert_eq!(s, "0x00000abc", "{fmt}");
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_pointer_keeps_eight_digits_for_wide_addresses() {
    for fmt in ["%p", "%20p", "%-3p"] {
        let s = one(fmt, Arg::Ptr(0x1_2345_6789));
        assert_eq!(s, "0x23456789", "{fmt}");
    }
    let (s, n) = render("[%p]", &[Arg::from(usize::MAX as *const u8)]);
    assert_eq!((s.as_str(), n), ("[0xffffffff]", 12));
}

#[test]
fn test_decimal_roundtrip() {
    let samples = [i32::MIN, i32::MIN + 1, -65536, -1, 0, 1, 9, 10, 99, 1_000_000, i32::MAX];
    for v in samples {
        let s = one("%d", Arg::from(v));
        assert_eq!(s.parse::<i32>().unwrap(), v);
    }
    let samples = [i64::MIN, i64::MIN + 1, -(1 << 40), 1 << 40, i64::MAX];
    for v in samples {
        let s = one("%ld", Arg::from(v));
        assert_eq!(s.parse::<i64>().unwrap(), v);
    }
}

#[test]
fn test_truncated_count_matches_unbounded() {
    let fmt = "%s:%08x:%-6d|%c";
    let args = [
        Arg::from("uart0"),
        Arg::from(0x3f20_1000u32),
        Arg::from(-12),
        Arg::from('k'),
    ];
    let (full, full_n) = render(fmt, &args);
    assert_eq!(full_n, full.len());

    for size in 0..full.len() + 3 {
        let mut buf = [0x55u8; 64];
        let n = printf::snprintf(&mut buf, size, fmt, &args);
        assert_eq!(n, full_n);
        if size == 0 {
            assert!(buf.iter().all(|&b| b == 0x55));
            continue;
        }
        let kept = (size - 1).min(full.len());
        assert_eq!(&buf[..kept], &full.as_bytes()[..kept]);
        assert_eq!(buf[kept], 0);
        assert!(buf[kept + 1..].iter().all(|&b| b == 0x55));
    }
}

#[test]
fn test_sprintf_into_exact_fit() {
    let mut buf = [0xffu8; 6];
    let n = sprintf!(&mut buf, "%s", "hello");
    assert_eq!(n, 5);
    assert_eq!(&buf, b"hello\0");
}
