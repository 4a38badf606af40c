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

//! Addressable frame memory (VRAM)
//!
//! 1MB of VRAM organized as a 1024×512 framebuffer of 16-bit texels in
//! 5-5-5 RGB format with a mask bit in bit 15. All rectangle operations
//! wrap coordinates modulo (1024, 512) rather than clamping or faulting,
//! matching the hardware address decoding.

use super::registers::MaskSettings;

/// VRAM width in texels
pub const VRAM_WIDTH: usize = 1024;

/// VRAM height in texels
pub const VRAM_HEIGHT: usize = 512;

/// Total VRAM size in texels
pub const VRAM_SIZE: usize = VRAM_WIDTH * VRAM_HEIGHT;

/// Total VRAM size in bytes
pub const VRAM_BYTES: usize = VRAM_SIZE * 2;

/// The GPU frame memory
///
/// Stored as a flat `Vec<u16>` in row-major order for cache efficiency.
///
/// # Examples
///
/// ```
/// use psgpu::core::gpu::Vram;
///
/// let mut vram = Vram::new();
/// vram.write(100, 100, 0x7FFF);
/// assert_eq!(vram.read(100, 100), 0x7FFF);
///
/// // Coordinates wrap modulo (1024, 512)
/// assert_eq!(vram.read(100 + 1024, 100 + 512), 0x7FFF);
/// ```
pub struct Vram {
    texels: Vec<u16>,
}

impl Vram {
    /// Create VRAM with every texel cleared to black
    pub fn new() -> Self {
        Self {
            texels: vec![0x0000; VRAM_SIZE],
        }
    }

    /// Clear every texel to black
    pub fn clear(&mut self) {
        self.texels.fill(0x0000);
    }

    /// Convert wrapped coordinates to a linear index
    #[inline(always)]
    fn index(x: u16, y: u16) -> usize {
        let x = (x & 0x3FF) as usize;
        let y = (y & 0x1FF) as usize;
        y * VRAM_WIDTH + x
    }

    /// Read one texel; coordinates wrap
    #[inline(always)]
    pub fn read(&self, x: u16, y: u16) -> u16 {
        self.texels[Self::index(x, y)]
    }

    /// Write one texel; coordinates wrap
    #[inline(always)]
    pub fn write(&mut self, x: u16, y: u16, value: u16) {
        self.texels[Self::index(x, y)] = value;
    }

    /// Write one texel honoring the mask policy
    ///
    /// Skips the write when mask checking is on and the destination texel
    /// has its mask bit set; ORs the mask bit into the written value when
    /// mask setting is on.
    #[inline(always)]
    pub fn write_masked(&mut self, x: u16, y: u16, value: u16, mask: MaskSettings) {
        let idx = Self::index(x, y);
        if mask.check_mask_bit && self.texels[idx] & 0x8000 != 0 {
            return;
        }
        let value = if mask.set_mask_bit {
            value | 0x8000
        } else {
            value
        };
        self.texels[idx] = value;
    }

    /// Fill a rectangle with a solid 15-bit color
    ///
    /// Hardware fill semantics:
    /// - zero width or height means the maximum extent (1024 or 512)
    /// - the width is rounded up to a multiple of 16 texels
    /// - the mask policy is ignored (direct overwrite)
    /// - start + extent past the VRAM edge wraps to the opposite edge
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: u16) {
        let width = if width == 0 {
            VRAM_WIDTH as u16
        } else {
            (width & 0x3FF).div_ceil(16) * 16
        };
        let height = if height == 0 {
            VRAM_HEIGHT as u16
        } else {
            height & 0x1FF
        };

        for dy in 0..height {
            for dx in 0..width {
                self.write(x.wrapping_add(dx), y.wrapping_add(dy), color);
            }
        }
    }

    /// Copy a rectangle within VRAM
    ///
    /// Zero width/height means maximum extent. The copy respects the
    /// mask-check/mask-apply policy and goes through a temporary buffer so
    /// overlapping source and destination behave as if read first.
    pub fn copy_rect(
        &mut self,
        src_x: u16,
        src_y: u16,
        dst_x: u16,
        dst_y: u16,
        width: u16,
        height: u16,
        mask: MaskSettings,
    ) {
        let width = ((width.wrapping_sub(1)) & 0x3FF) + 1;
        let height = ((height.wrapping_sub(1)) & 0x1FF) + 1;

        // Snapshot the source first so overlapping rectangles copy cleanly
        let mut buffer = Vec::with_capacity(width as usize * height as usize);
        for dy in 0..height {
            for dx in 0..width {
                buffer.push(self.read(src_x.wrapping_add(dx), src_y.wrapping_add(dy)));
            }
        }

        let mut it = buffer.into_iter();
        for dy in 0..height {
            for dx in 0..width {
                let texel = it.next().unwrap_or(0);
                self.write_masked(dst_x.wrapping_add(dx), dst_y.wrapping_add(dy), texel, mask);
            }
        }
    }

    /// Bulk-write a rectangle from an external texel stream
    ///
    /// Texels are consumed in row-major order; a short stream leaves the
    /// remaining destination texels untouched. Writes honor the mask
    /// policy and coordinates wrap.
    pub fn write_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        data: &[u16],
        mask: MaskSettings,
    ) {
        let mut it = data.iter();
        for dy in 0..height {
            for dx in 0..width {
                match it.next() {
                    Some(&texel) => {
                        self.write_masked(x.wrapping_add(dx), y.wrapping_add(dy), texel, mask)
                    }
                    None => return,
                }
            }
        }
    }

    /// Bulk-read a rectangle into a texel vector
    ///
    /// Reads are not affected by the mask policy.
    pub fn read_rect(&self, x: u16, y: u16, width: u16, height: u16) -> Vec<u16> {
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for dy in 0..height {
            for dx in 0..width {
                out.push(self.read(x.wrapping_add(dx), y.wrapping_add(dy)));
            }
        }
        out
    }

    /// Serialize the full VRAM image as little-endian bytes
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(VRAM_BYTES);
        for texel in &self.texels {
            out.extend_from_slice(&texel.to_le_bytes());
        }
        out
    }

    /// Restore the full VRAM image from little-endian bytes
    ///
    /// The caller validates the length; extra bytes are ignored and a
    /// short image leaves the tail untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        for (texel, chunk) in self.texels.iter_mut().zip(bytes.chunks_exact(2)) {
            *texel = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
    }
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}
