// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! IOP main RAM
//!
//! A flat little-endian byte array. The segment bits of a virtual address
//! (KUSEG/KSEG0/KSEG1) are stripped and the physical address wraps modulo
//! the RAM size, so every segment and every mirror sees the same bytes.
//!
//! # Example
//!
//! ```
//! use psrx_iop::core::memory::Ram;
//!
//! let mut ram = Ram::new();
//!
//! // Write through KSEG0
//! ram.write32(0x80000000, 0x12345678);
//!
//! // Same location through KUSEG and KSEG1
//! assert_eq!(ram.read32(0x00000000), 0x12345678);
//! assert_eq!(ram.read32(0xA0000000), 0x12345678);
//! ```

use crate::core::error::{IopError, Result};

/// IOP main RAM
pub struct Ram {
    data: Vec<u8>,

    /// `size - 1`; the size is always a power of two
    mask: u32,
}

impl Ram {
    /// Default RAM size (2MB)
    pub const DEFAULT_SIZE: usize = 2 * 1024 * 1024;

    /// Smallest accepted RAM size (4KB)
    pub const MIN_SIZE: usize = 4 * 1024;

    /// Segment bits cleared by address translation
    const PHYS_MASK: u32 = 0x1FFF_FFFF;

    /// Create 2MB of zeroed RAM
    pub fn new() -> Self {
        Self {
            data: vec![0u8; Self::DEFAULT_SIZE],
            mask: (Self::DEFAULT_SIZE - 1) as u32,
        }
    }

    /// Create zeroed RAM of `size` bytes
    ///
    /// # Errors
    ///
    /// `size` must be a power of two between 4KB and 512MB.
    pub fn with_size(size: usize) -> Result<Self> {
        if !size.is_power_of_two() || size < Self::MIN_SIZE || size > Self::PHYS_MASK as usize + 1
        {
            return Err(IopError::Config(format!(
                "RAM size must be a power of two between {} and {} bytes, got {}",
                Self::MIN_SIZE,
                Self::PHYS_MASK as usize + 1,
                size
            )));
        }

        Ok(Self {
            data: vec![0u8; size],
            mask: (size - 1) as u32,
        })
    }

    /// RAM size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Clear RAM to zero
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline(always)]
    fn offset(&self, vaddr: u32) -> usize {
        (vaddr & Self::PHYS_MASK & self.mask) as usize
    }

    /// Copy `bytes` into RAM starting at `vaddr`
    ///
    /// # Errors
    ///
    /// Returns [`IopError::ProgramTooLarge`] if the image is bigger than RAM.
    pub fn load(&mut self, vaddr: u32, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.data.len() {
            return Err(IopError::ProgramTooLarge {
                size: bytes.len(),
                capacity: self.data.len(),
            });
        }

        let start = self.offset(vaddr);
        let end = start + bytes.len();
        if end <= self.data.len() {
            self.data[start..end].copy_from_slice(bytes);
        } else {
            // Image wraps past the top of RAM
            let (head, tail) = bytes.split_at(self.data.len() - start);
            self.data[start..].copy_from_slice(head);
            self.data[..tail.len()].copy_from_slice(tail);
        }

        log::debug!(
            "Loaded {} bytes at 0x{:08X} (offset 0x{:06X})",
            bytes.len(),
            vaddr,
            start
        );
        Ok(())
    }

    #[inline(always)]
    pub fn read8(&self, vaddr: u32) -> u8 {
        self.data[self.offset(vaddr)]
    }

    /// Read a little-endian halfword
    #[inline]
    pub fn read16(&self, vaddr: u32) -> u16 {
        let lo = self.read8(vaddr) as u16;
        let hi = self.read8(vaddr.wrapping_add(1)) as u16;
        lo | (hi << 8)
    }

    /// Read a little-endian word
    #[inline]
    pub fn read32(&self, vaddr: u32) -> u32 {
        let offset = self.offset(vaddr);
        if let Some(bytes) = self.data.get(offset..offset + 4) {
            let mut word = [0u8; 4];
            word.copy_from_slice(bytes);
            return u32::from_le_bytes(word);
        }

        // Access straddles the top of RAM and wraps to the bottom
        (0..4).fold(0, |acc, i| {
            acc | (self.read8(vaddr.wrapping_add(i)) as u32) << (i * 8)
        })
    }

    #[inline(always)]
    pub fn write8(&mut self, vaddr: u32, value: u8) {
        let offset = self.offset(vaddr);
        self.data[offset] = value;
    }

    /// Write a little-endian halfword
    #[inline]
    pub fn write16(&mut self, vaddr: u32, value: u16) {
        self.write8(vaddr, value as u8);
        self.write8(vaddr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Write a little-endian word
    #[inline]
    pub fn write32(&mut self, vaddr: u32, value: u32) {
        let offset = self.offset(vaddr);
        if let Some(bytes) = self.data.get_mut(offset..offset + 4) {
            bytes.copy_from_slice(&value.to_le_bytes());
            return;
        }

        for (i, byte) in value.to_le_bytes().into_iter().enumerate() {
            self.write8(vaddr.wrapping_add(i as u32), byte);
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
