//! Raw 32-bit memory-mapped load/store primitives.
//!
//! These are the direct equivalents of the vendor register macros: a single
//! volatile bus transaction at the given address, nothing else. No alignment
//! adjustment, no masking, no byte swap, no error path. A bus fault is a
//! platform-level event and is not caught or translated here.

/// Load a 32-bit value from a memory-mapped address.
///
/// # Safety
///
/// `addr` must be a valid, mapped, 4-byte-aligned device address, and the
/// access path must be uncached.
#[inline]
pub unsafe fn read32(addr: usize) -> u32 {
    core::ptr::read_volatile(addr as *const u32)
}

/// Store a 32-bit value to a memory-mapped address.
///
/// # Safety
///
/// `addr` must be a valid, mapped, 4-byte-aligned device address, and the
/// access path must be uncached.
#[inline]
pub unsafe fn write32(addr: usize, value: u32) {
    core::ptr::write_volatile(addr as *mut u32, value);
}
