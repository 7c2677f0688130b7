//! Masked register field access.
//!
//! Address-table entries in the GEM firmware describe each register as an
//! offset, an r/w permission set, and a bit mask selecting the field within
//! the 32-bit word. This module carries those descriptions; the actual bus
//! access happens through [`GemLoaderV`](crate::GemLoaderV).

use bitflags::bitflags;

bitflags! {
    /// Register access permissions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Permission: u8 {
        const R = 1 << 0;
        const W = 1 << 1;
        /// Read-write.
        const RW = Self::R.bits() | Self::W.bits();
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Permission {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Permission({=u8:#x})", self.bits());
    }
}

/// A register field selected by a 32-bit mask.
///
/// The field's shift is the mask's trailing-zero count, so a mask of
/// `0x0000_FF00` addresses an 8-bit field at bit 8. A mask of `0xFFFF_FFFF`
/// degenerates to whole-word access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    mask: u32,
}

impl Field {
    /// Create a field from its mask.
    ///
    /// A zero mask selects no bits and is a caller bug (debug-asserted).
    #[inline]
    pub const fn new(mask: u32) -> Self {
        ::core::debug_assert!(mask != 0, "field mask must select at least one bit");
        Self { mask }
    }

    /// The field's bit mask.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Bit position of the field's least significant bit.
    #[inline]
    pub const fn shift(&self) -> u32 {
        self.mask.trailing_zeros()
    }

    /// Extract the field value from a register word.
    #[inline]
    pub const fn extract(&self, word: u32) -> u32 {
        (word & self.mask) >> self.shift()
    }

    /// Merge `value` into `word`, preserving bits outside the mask.
    #[inline]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (self.shifted(value)) | (word & !self.mask)
    }

    /// `value` shifted into field position and clamped to the mask.
    #[inline]
    pub const fn shifted(&self, value: u32) -> u32 {
        (value << self.shift()) & self.mask
    }
}

/// Offset and permission of one register, as listed in the address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterDesc {
    /// Byte offset from the device base address.
    pub offset: u32,
    /// Allowed access directions.
    pub permission: Permission,
}

impl RegisterDesc {
    #[inline]
    pub const fn new(offset: u32, permission: Permission) -> Self {
        Self { offset, permission }
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.permission.contains(Permission::R)
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.permission.contains(Permission::W)
    }
}

/// Masked register access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum AccessError {
    /// The register has no read permission.
    NotReadable,
    /// The register has no write permission.
    NotWritable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_follows_trailing_zeros_of_mask() {
        assert_eq!(Field::new(0x0000_0001).shift(), 0);
        assert_eq!(Field::new(0x0000_FF00).shift(), 8);
        assert_eq!(Field::new(0x8000_0000).shift(), 31);
    }

    #[test]
    fn extract_masks_then_shifts_down() {
        let field = Field::new(0x0000_FF00);
        assert_eq!(field.extract(0xAABB_CCDD), 0xCC);
        assert_eq!(field.extract(0x0000_0000), 0);
    }

    #[test]
    fn insert_preserves_bits_outside_mask() {
        let field = Field::new(0x0000_FF00);
        assert_eq!(field.insert(0xAABB_CCDD, 0x11), 0xAABB_11DD);
        // Oversized values are clamped to the mask.
        assert_eq!(field.insert(0, 0x1FF), 0x0000_FF00);
    }

    #[test]
    fn whole_word_mask_degenerates_to_plain_access() {
        let field = Field::new(0xFFFF_FFFF);
        assert_eq!(field.shift(), 0);
        assert_eq!(field.extract(0xDEAD_BEEF), 0xDEAD_BEEF);
        assert_eq!(field.insert(0x1234_5678, 0xDEAD_BEEF), 0xDEAD_BEEF);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "field mask must select at least one bit")]
    fn zero_mask_is_rejected() {
        let _ = Field::new(0);
    }

    #[test]
    fn permission_queries() {
        assert!(RegisterDesc::new(0, Permission::RW).is_readable());
        assert!(RegisterDesc::new(0, Permission::RW).is_writable());
        assert!(!RegisterDesc::new(0, Permission::R).is_writable());
        assert!(!RegisterDesc::new(0, Permission::W).is_readable());
    }
}
