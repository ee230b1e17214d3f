//! Addresses of the devices the console can be bound to.

/// 16550-compatible UART of the Qemu `virt` machine.
///
/// This is `serial@10000000` in the device tree.
#[cfg(not(all(feature = "board", not(feature = "qemu"))))]
pub const UART_BASE: usize = 0x1000_0000;

/// 16550-compatible UART of the Loongson 2K1000 board.
///
/// This is `serial@1fe001e0` in the device tree.
#[cfg(all(feature = "board", not(feature = "qemu")))]
pub const UART_BASE: usize = 0x1fe0_01e0;

/// Iterations of the busy-wait loop the UART is given to settle after reset.
pub const UART_SETTLE_CYCLES: u32 = 150;
