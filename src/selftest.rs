//! Built-in self-tests for the GEM_LOADER_V core.
//!
//! Both tests walk a write/read-back pattern over the device and report the
//! first location that does not echo. They are destructive: whatever the
//! registers or user-logic memory held beforehand is clobbered, and a device
//! reset may result.
//!
//! Caveats inherited from the hardware integration contract:
//! - Caching must be disabled on the access path.
//! - If the hardware system is misbuilt, a test may never return.
//! - The memory test may fail if data memory and the device are not on the
//!   same bus.

use crate::memory_map::s_cfg_axi;
use crate::GemLoaderV;

/// Per-location multiplier for the walk pattern, so every location carries a
/// distinct non-zero value.
const PATTERN_FACTOR: u32 = 0x10;

/// Largest memory window testable through 32-bit byte offsets (4 GiB).
pub const MAX_MEM_WORDS: usize = (u32::MAX as usize + 1) / 4;

/// Self-test failures. Each variant reports the first mismatching location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A slave register did not echo the written pattern.
    RegisterMismatch { offset: u32, wrote: u32, read: u32 },
    /// A user-logic memory word did not echo the written pattern.
    MemoryMismatch { offset: u32, wrote: u32, read: u32 },
}

/// Pattern written to register or memory word `index` during a walk.
#[inline]
const fn walk_pattern(index: usize) -> u32 {
    (index as u32 + 1).wrapping_mul(PATTERN_FACTOR)
}

impl GemLoaderV {
    /// Run the register self-test.
    ///
    /// Writes a distinct pattern to each of the eight slave registers, then
    /// reads every register back and compares. Destructive; see the
    /// [module docs](self) for the hardware caveats.
    pub fn self_test_registers(&self) -> Result<(), Error> {
        debug!("register self-test: walking {} registers", s_cfg_axi::REG_COUNT);

        for i in 0..s_cfg_axi::REG_COUNT {
            self.write_reg(s_cfg_axi::reg_offset(i), walk_pattern(i));
        }
        self.verify_register_walk()?;

        debug!("register self-test passed");
        Ok(())
    }

    fn verify_register_walk(&self) -> Result<(), Error> {
        for i in 0..s_cfg_axi::REG_COUNT {
            let offset = s_cfg_axi::reg_offset(i);
            let wrote = walk_pattern(i);
            let read = self.read_reg(offset);
            if read != wrote {
                error!(
                    "register self-test failed at offset {}: wrote {:#x}, read {:#x}",
                    offset, wrote, read
                );
                return Err(Error::RegisterMismatch { offset, wrote, read });
            }
        }
        Ok(())
    }

    /// Run the user-logic memory self-test over `words` 32-bit locations
    /// starting at the device base address.
    ///
    /// Writes a distinct pattern to each word, then reads every word back and
    /// compares. `words == 0` trivially passes; `words` beyond
    /// [`MAX_MEM_WORDS`] does not fit the 32-bit offset space and is
    /// debug-asserted. Destructive; see the [module docs](self) for the
    /// hardware caveats.
    pub fn self_test_memory(&self, words: usize) -> Result<(), Error> {
        debug_assert!(
            words <= MAX_MEM_WORDS,
            "window of {} words exceeds the 32-bit offset space",
            words,
        );
        debug!("memory self-test: walking {} words", words);

        for i in 0..words {
            self.write_mem(i as u32 * 4, walk_pattern(i));
        }
        self.verify_memory_walk(words)?;

        debug!("memory self-test passed");
        Ok(())
    }

    fn verify_memory_walk(&self, words: usize) -> Result<(), Error> {
        for i in 0..words {
            let offset = i as u32 * 4;
            let wrote = walk_pattern(i);
            let read = self.read_mem(offset);
            if read != wrote {
                error!(
                    "memory self-test failed at offset {}: wrote {:#x}, read {:#x}",
                    offset, wrote, read
                );
                return Err(Error::MemoryMismatch { offset, wrote, read });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_pattern_is_distinct_and_nonzero_per_register() {
        let mut seen = [0u32; s_cfg_axi::REG_COUNT];
        for i in 0..s_cfg_axi::REG_COUNT {
            let p = walk_pattern(i);
            assert_ne!(p, 0);
            assert!(!seen[..i].contains(&p));
            seen[i] = p;
        }
        assert_eq!(walk_pattern(0), 0x10);
        assert_eq!(walk_pattern(7), 0x80);
    }

    #[test]
    fn register_self_test_passes_against_ram_backed_window() {
        let mut regs = [0u32; s_cfg_axi::REG_COUNT];
        let dev = GemLoaderV::new(regs.as_mut_ptr() as usize);

        assert_eq!(dev.self_test_registers(), Ok(()));
        // Destructive: the walk pattern is left behind.
        assert_eq!(regs[0], 0x10);
        assert_eq!(regs[7], 0x80);
    }

    #[test]
    fn register_self_test_reports_first_stuck_register() {
        let mut regs = [0u32; s_cfg_axi::REG_COUNT];
        let dev = GemLoaderV::new(regs.as_mut_ptr() as usize);

        for i in 0..s_cfg_axi::REG_COUNT {
            dev.write_reg(s_cfg_axi::reg_offset(i), walk_pattern(i));
        }
        // A register stuck at zero is read back during verification.
        dev.write_reg(s_cfg_axi::REG3_OFFSET, 0);

        assert_eq!(
            dev.verify_register_walk(),
            Err(Error::RegisterMismatch {
                offset: s_cfg_axi::REG3_OFFSET,
                wrote: walk_pattern(3),
                read: 0,
            })
        );
    }

    #[test]
    fn memory_self_test_passes_against_ram_backed_window() {
        let mut buf = [0u32; 64];
        let dev = GemLoaderV::new(buf.as_mut_ptr() as usize);

        assert_eq!(dev.self_test_memory(buf.len()), Ok(()));
        assert_eq!(buf[63], walk_pattern(63));
    }

    #[test]
    fn memory_self_test_of_zero_words_trivially_passes() {
        let mut buf = [0u32; 1];
        let dev = GemLoaderV::new(buf.as_mut_ptr() as usize);

        assert_eq!(dev.self_test_memory(0), Ok(()));
        assert_eq!(buf[0], 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "exceeds the 32-bit offset space")]
    fn memory_self_test_rejects_oversized_window() {
        let mut buf = [0u32; 1];
        let dev = GemLoaderV::new(buf.as_mut_ptr() as usize);

        let _ = dev.self_test_memory(MAX_MEM_WORDS + 1);
    }

    #[test]
    fn memory_self_test_reports_first_bad_word() {
        let mut buf = [0u32; 8];
        let dev = GemLoaderV::new(buf.as_mut_ptr() as usize);

        for i in 0..buf.len() {
            dev.write_mem(i as u32 * 4, walk_pattern(i));
        }
        dev.write_mem(5 * 4, !walk_pattern(5));

        assert_eq!(
            dev.verify_memory_walk(buf.len()),
            Err(Error::MemoryMismatch {
                offset: 20,
                wrote: walk_pattern(5),
                read: !walk_pattern(5),
            })
        );
    }
}
