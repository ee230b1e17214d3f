#![cfg_attr(not(test), no_std)]

use core::fmt;

use log::{Level, LevelFilter};

struct SimpleLogger;

/// Prints every enabled record on the printf console, one coloured line per
/// record. Records are dropped while no console is installed.
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(console) = printf::console() {
            console.print_fmt(format_args!("{}", Line(record)));
        }
    }

    fn flush(&self) {}
}

/// `ESC[<colour>m[LEVEL] message ESC[0m` plus a newline.
struct Line<'a, 'r>(&'a log::Record<'r>);

impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.0.level();
        writeln!(
            f,
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            level2color(level),
            level,
            self.0.args()
        )
    }
}

/// Level named by the `LOG` variable at build time.
pub fn parse_level(name: Option<&str>) -> LevelFilter {
    match name {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

/// 初始化日志记录器
///
/// 设置日志记录器和日志级别
pub fn init() {
    static LOGGER: SimpleLogger = SimpleLogger;
    log::set_logger(&LOGGER).ok();
    log::set_max_level(parse_level(option_env!("LOG")));
}

pub fn level2color(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 36,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}

/// `core::fmt` text on the console; dropped without one.
pub fn console_print(args: fmt::Arguments<'_>) {
    if let Ok(console) = printf::console() {
        console.print_fmt(args);
    }
}

#[macro_export]
macro_rules! lprint {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console_print(format_args!($fmt $(, $($arg)+)?))
    }
}

#[macro_export]
macro_rules! lprintln {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console_print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?))
    }
}
