//! GEM_LOADER_V register map constants (single source of truth).

/// Configuration slave register offsets, relative to the device base address.
///
/// The core exposes eight 32-bit registers on a 4-byte stride. Their semantic
/// meaning is owned by the IP core and is not modeled here.
pub mod s_cfg_axi {
    pub const REG0_OFFSET: u32 = 0;
    pub const REG1_OFFSET: u32 = 4;
    pub const REG2_OFFSET: u32 = 8;
    pub const REG3_OFFSET: u32 = 12;
    pub const REG4_OFFSET: u32 = 16;
    pub const REG5_OFFSET: u32 = 20;
    pub const REG6_OFFSET: u32 = 24;
    pub const REG7_OFFSET: u32 = 28;

    /// Number of slave registers.
    pub const REG_COUNT: usize = 8;
    /// Byte stride between consecutive registers.
    pub const REG_STRIDE: u32 = 4;
    /// Size of the register window in bytes.
    pub const WINDOW_SIZE: u32 = REG_COUNT as u32 * REG_STRIDE;

    /// Byte offset of register `index`.
    ///
    /// Plain stride arithmetic; `index` is not checked against [`REG_COUNT`].
    #[inline]
    pub const fn reg_offset(index: usize) -> u32 {
        index as u32 * REG_STRIDE
    }
}

/// CTP7 AXI window translation.
///
/// On the CTP7 carrier the GEM firmware address table uses 32-bit word
/// addresses; the Zynq maps the word space at `GEM_AMC_BASE` with each word
/// occupying 4 bus bytes.
pub mod ctp7 {
    /// Bus base address of the GEM AMC register window on the Zynq.
    pub const GEM_AMC_BASE: u32 = 0x6400_0000;

    /// Translate a firmware word address to the bus address seen by the CPU.
    #[inline]
    pub const fn real_address(word_addr: u32) -> u32 {
        (word_addr << 2) + GEM_AMC_BASE
    }
}
