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

//! GP0 Fill Rectangle command
//!
//! GP0(0x02) performs fast VRAM fills, commonly used for clearing buffers.
//! Unlike the tile commands (0x60-0x7F) it operates on raw VRAM
//! coordinates, ignores the drawing area, offset, and mask policy, and
//! fills in 16-texel-wide strips.

use super::super::fields::{self, Color};
use super::super::GPU;

impl GPU {
    /// GP0(0x02): Fill Rectangle in VRAM
    ///
    /// # Command Format
    ///
    /// ```text
    /// Word 0: 0x02BBGGRR - Command + fill color
    /// Word 1: YYYYXXXX   - Top-left corner (X bits 0-9, Y bits 16-24)
    /// Word 2: HHHHWWWW   - Extent (W bits 0-9, H bits 16-24)
    /// ```
    ///
    /// Zero width or height selects the maximum extent; the width is
    /// rounded up to a multiple of 16 texels.
    ///
    /// # Examples
    ///
    /// ```
    /// use psgpu::core::GPU;
    ///
    /// let mut gpu = GPU::new();
    /// gpu.write_gp0(0x020000FF); // fill with red
    /// gpu.write_gp0(0x00320032); // at (50, 50)
    /// gpu.write_gp0(0x00640064); // 100×100 (width padded to 112)
    ///
    /// assert_eq!(gpu.read_vram(50, 50), 0x001F);
    /// ```
    pub(in crate::core::gpu) fn cmd_fill_rect(&mut self, words: &[u32]) {
        let color = Color::from_word(words[0]).to_rgb15();
        let (x, y) = fields::vram_coords(words[1]);
        let (width, height) = fields::rect_size(words[2]);

        log::trace!("GP0(02): fill ({}, {}) {}×{}", x, y, width, height);

        self.vram.fill_rect(x, y, width, height, color);
    }
}
