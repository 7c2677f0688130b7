//! Typed handle over one GEM_LOADER_V instance.
//!
//! Wraps the instance base address and confines all `unsafe` volatile access
//! to the [`mmio`](crate::mmio) primitives, the same way `RamSlice` confines
//! block access. Register offsets are used as-is; the target address is
//! always exactly `base + offset`.

use crate::field::{AccessError, Field, RegisterDesc};
use crate::memory_map::s_cfg_axi;
use crate::mmio;

/// One GEM_LOADER_V instance at a fixed base address.
///
/// # Safety contract
///
/// Caller must ensure `base` is the mapped, 4-byte-aligned base address of a
/// GEM_LOADER_V register window, that the mapping is uncached, and that this
/// handle has exclusive access to the device (no coordination is performed
/// here).
#[derive(Debug, Clone, Copy)]
pub struct GemLoaderV {
    base: usize,
}

impl GemLoaderV {
    /// Create a handle for the instance at `base`.
    #[inline]
    pub const fn new(base: usize) -> Self {
        Self { base }
    }

    /// Instance base address.
    #[inline]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Write a 32-bit value to the register at `offset` bytes from base.
    ///
    /// `offset` is not checked against the register window; out-of-range
    /// offsets are the caller's responsibility. If the component is
    /// implemented in a smaller width, only the least significant data is
    /// written.
    #[inline]
    pub fn write_reg(&self, offset: u32, value: u32) {
        unsafe { mmio::write32(self.base + offset as usize, value) }
    }

    /// Read a 32-bit value from the register at `offset` bytes from base.
    ///
    /// If the component is implemented in a smaller width, the most
    /// significant data reads as 0.
    #[inline]
    pub fn read_reg(&self, offset: u32) -> u32 {
        unsafe { mmio::read32(self.base + offset as usize) }
    }

    /// Write register number `index` (0..[`REG_COUNT`](s_cfg_axi::REG_COUNT)).
    ///
    /// Stride arithmetic on top of [`write_reg`](Self::write_reg); the index
    /// is debug-asserted only.
    #[inline]
    pub fn write_reg_n(&self, index: usize, value: u32) {
        debug_assert!(
            index < s_cfg_axi::REG_COUNT,
            "register index {} out of range (core has {} registers)",
            index,
            s_cfg_axi::REG_COUNT,
        );
        self.write_reg(s_cfg_axi::reg_offset(index), value);
    }

    /// Read register number `index` (0..[`REG_COUNT`](s_cfg_axi::REG_COUNT)).
    #[inline]
    pub fn read_reg_n(&self, index: usize) -> u32 {
        debug_assert!(
            index < s_cfg_axi::REG_COUNT,
            "register index {} out of range (core has {} registers)",
            index,
            s_cfg_axi::REG_COUNT,
        );
        self.read_reg(s_cfg_axi::reg_offset(index))
    }

    /// Write a 32-bit value into the core's user-logic memory at `offset`
    /// bytes from base.
    #[inline]
    pub fn write_mem(&self, offset: u32, value: u32) {
        unsafe { mmio::write32(self.base + offset as usize, value) }
    }

    /// Read a 32-bit value from the core's user-logic memory at `offset`
    /// bytes from base.
    #[inline]
    pub fn read_mem(&self, offset: u32) -> u32 {
        unsafe { mmio::read32(self.base + offset as usize) }
    }

    /// Read a field of a described register, masked and shifted down.
    ///
    /// Fails if the register is not readable.
    pub fn read_field(&self, reg: RegisterDesc, field: Field) -> Result<u32, AccessError> {
        if !reg.is_readable() {
            return Err(AccessError::NotReadable);
        }
        Ok(field.extract(self.read_reg(reg.offset)))
    }

    /// Write a field of a described register.
    ///
    /// For readable registers this is a read-modify-write preserving the bits
    /// outside the field mask. For write-only registers the shifted value is
    /// stored directly. Fails if the register is not writable.
    pub fn write_field(
        &self,
        reg: RegisterDesc,
        field: Field,
        value: u32,
    ) -> Result<(), AccessError> {
        if !reg.is_writable() {
            return Err(AccessError::NotWritable);
        }
        let word = if reg.is_readable() {
            field.insert(self.read_reg(reg.offset), value)
        } else {
            field.shifted(value)
        };
        trace!("write_field: {:#x} to offset {}", word, reg.offset);
        self.write_reg(reg.offset, word);
        Ok(())
    }
}
