//! Raw memory-mapped register access.

/// Write a 32-bit device register.
///
/// # Safety
///
/// `reg` must be the address of a mapped, 4-byte aligned register.
#[inline(always)]
pub unsafe fn write(reg: usize, data: u32) {
    unsafe { (reg as *mut u32).write_volatile(data) }
}

/// Read a 32-bit device register.
///
/// # Safety
///
/// `reg` must be the address of a mapped, 4-byte aligned register.
#[inline(always)]
pub unsafe fn read(reg: usize) -> u32 {
    unsafe { (reg as *const u32).read_volatile() }
}

/// Busy-wait for roughly `count` loop iterations.
#[inline(never)]
pub fn delay(count: u32) {
    for _ in 0..count {
        core::hint::spin_loop();
    }
}
