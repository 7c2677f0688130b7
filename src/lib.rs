#![cfg_attr(not(test), no_std)]
#![doc = "Hardware abstraction for the GEM_LOADER_V FPGA soft-IP core."]
#![doc = ""]
#![doc = "The core exposes eight 32-bit registers on a 4-byte stride plus a"]
#![doc = "user-logic memory window, all reached through plain 32-bit bus"]
#![doc = "transactions at `base + offset`. This crate provides the raw"]
#![doc = "load/store primitives, a typed device handle, masked field access,"]
#![doc = "and the two built-in self-tests."]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod field;
pub mod memory_map;
pub mod mmio;
pub mod selftest;

mod device;
pub use device::GemLoaderV;
