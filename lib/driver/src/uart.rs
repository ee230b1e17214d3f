use config::device::{UART_BASE, UART_SETTLE_CYCLES};
use spin::Mutex;
pub use uart_16550::MmioSerialPort;

use crate::{CharDevice, mmio::delay};

/// 16550-compatible serial port behind a spin lock.
pub struct UartDevice {
    base: usize,
    device: Mutex<MmioSerialPort>,
}

impl UartDevice {
    /// # Safety
    ///
    /// `base` must be the mapped register window of a 16550-compatible UART
    /// that nothing else drives.
    pub unsafe fn new(base: usize) -> Self {
        let serialport = unsafe { MmioSerialPort::new(base) };
        Self {
            base,
            device: Mutex::new(serialport),
        }
    }

    /// The board's default console UART.
    ///
    /// # Safety
    ///
    /// See [`UartDevice::new`].
    pub unsafe fn board_default() -> Self {
        unsafe { Self::new(UART_BASE) }
    }

    /// Reset the line settings and enable the FIFOs.
    pub fn init(&self) {
        self.device.lock().init();
        delay(UART_SETTLE_CYCLES);
        log::info!("uart: initialized at {:#x}", self.base);
    }

    pub fn base(&self) -> usize {
        self.base
    }
}

impl CharDevice for UartDevice {
    fn putchar(&self, c: u8) {
        let mut port = self.device.lock();
        if c == b'\n' {
            port.send(b'\r');
        }
        port.send(c);
    }

    fn getchar(&self) -> u8 {
        self.device.lock().receive()
    }

    fn puts(&self, datas: &[u8]) {
        let mut port = self.device.lock();
        for &data in datas {
            if data == b'\n' {
                port.send(b'\r');
            }
            port.send(data);
        }
    }
}
