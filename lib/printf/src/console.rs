//! Console binding: formatted output straight to a character device.
//!
//! With the `multi-core` feature every call holds the console's spin lock
//! from the first byte to the last, so output of concurrent calls on
//! different harts never interleaves. Buffer calls never touch the console.

use core::fmt::{self, Write};

use driver::CharDevice;
#[cfg(feature = "multi-core")]
use mutex::{Spin, SpinLock, SpinMutexGuard};
use spin::Once;

use crate::{
    args::{Arg, ArgList},
    error::{PrintError, PrintResult},
    format::format,
    sink::{ConsoleSink, NullSink},
};

/// A character device used as a formatted-output target.
pub struct Console<D: CharDevice> {
    device: D,
    #[cfg(feature = "multi-core")]
    lock: SpinLock<()>,
}

impl<D: CharDevice> Console<D> {
    pub const fn new(device: D) -> Self {
        Self {
            device,
            #[cfg(feature = "multi-core")]
            lock: SpinLock::new(()),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    #[cfg(feature = "multi-core")]
    fn acquire(&self) -> SpinMutexGuard<'_, (), Spin> {
        self.lock.lock()
    }

    #[cfg(not(feature = "multi-core"))]
    fn acquire(&self) {}

    pub fn vprintf<F: AsRef<[u8]> + ?Sized>(&self, fmt: &F, args: &mut ArgList<'_, '_>) -> usize {
        let _guard = self.acquire();
        let mut sink = ConsoleSink::new(&self.device);
        format(&mut sink, fmt.as_ref(), args)
    }

    pub fn printf<F: AsRef<[u8]> + ?Sized>(&self, fmt: &F, args: &[Arg<'_>]) -> usize {
        self.vprintf(fmt, &mut ArgList::new(args))
    }

    /// `core::fmt` output under the same lock as `printf`.
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        let _guard = self.acquire();
        // the device cannot fail, so neither can the writer
        let _ = DeviceWriter(&self.device).write_fmt(args);
    }
}

struct DeviceWriter<'d, D: CharDevice>(&'d D);

impl<D: CharDevice> Write for DeviceWriter<'_, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.puts(s.as_bytes());
        Ok(())
    }
}

pub type GlobalConsole = Console<&'static dyn CharDevice>;

static CONSOLE: Once<GlobalConsole> = Once::new();

/// Make `device` the target of [`printf`](crate::printf) and friends.
/// Only the first call wins.
pub fn install(device: &'static dyn CharDevice) -> PrintResult<()> {
    let mut installed = false;
    CONSOLE.call_once(|| {
        installed = true;
        Console::new(device)
    });
    if !installed {
        return Err(PrintError::ConsoleBusy);
    }
    log::info!("console: installed");
    Ok(())
}

pub fn console() -> PrintResult<&'static GlobalConsole> {
    CONSOLE.get().ok_or(PrintError::NoConsole)
}

/// Like [`vprintf`] but reports a missing console.
pub fn try_vprintf<F: AsRef<[u8]> + ?Sized>(
    fmt: &F,
    args: &mut ArgList<'_, '_>,
) -> PrintResult<usize> {
    Ok(console()?.vprintf(fmt, args))
}

/// Print to the installed console. Without one the output is dropped, but the
/// count is still computed.
pub fn vprintf<F: AsRef<[u8]> + ?Sized>(fmt: &F, args: &mut ArgList<'_, '_>) -> usize {
    match console() {
        Ok(console) => console.vprintf(fmt, args),
        Err(_) => format(&mut NullSink, fmt.as_ref(), args),
    }
}

pub fn printf<F: AsRef<[u8]> + ?Sized>(fmt: &F, args: &[Arg<'_>]) -> usize {
    vprintf(fmt, &mut ArgList::new(args))
}
