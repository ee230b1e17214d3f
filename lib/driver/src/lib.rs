//! Character devices the console can be bound to.

#![cfg_attr(not(test), no_std)]

pub mod mmio;
pub mod uart;

pub use mmio::delay;
pub use uart::UartDevice;

/// A byte-oriented output/input device.
///
/// `putchar` may block until the device accepts the byte; it never fails.
pub trait CharDevice: Send + Sync {
    fn putchar(&self, c: u8);

    fn getchar(&self) -> u8;

    /// Put Chars Out
    fn puts(&self, datas: &[u8]) {
        for &data in datas {
            self.putchar(data);
        }
    }
}

impl<T: CharDevice + ?Sized> CharDevice for &T {
    fn putchar(&self, c: u8) {
        (**self).putchar(c)
    }

    fn getchar(&self) -> u8 {
        (**self).getchar()
    }

    fn puts(&self, datas: &[u8]) {
        (**self).puts(datas)
    }
}
