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

//! GP0 attribute-set commands
//!
//! Single-word commands that mutate the rendering attribute context
//! and/or status register fields and never produce a primitive record:
//!
//! - 0xE1: Draw Mode Setting (texture page, transparency, dithering)
//! - 0xE2: Texture Window Setting
//! - 0xE3: Set Drawing Area Top-Left
//! - 0xE4: Set Drawing Area Bottom-Right
//! - 0xE5: Set Drawing Offset
//! - 0xE6: Mask Bit Setting
//! - 0x1F: Interrupt Request
//!
//! plus the one-word no-ops 0x00 (NOP) and 0x01 (clear texture cache).
//!
//! # References
//!
//! - [PSX-SPX: GP0 Drawing Settings](http://problemkaputt.de/psx-spx.htm#gpurenderattributes)

use super::super::fields::{TexturePage, Vertex};
use super::super::status::StatusFlags;
use super::super::GPU;

impl GPU {
    /// GP0(0x00): NOP
    pub(in crate::core::gpu) fn cmd_nop(&mut self, _words: &[u32]) {}

    /// GP0(0x01): Clear texture cache
    ///
    /// This core keeps no texture cache; the command exists so the id is
    /// consumed without being reported unknown.
    pub(in crate::core::gpu) fn cmd_clear_cache(&mut self, _words: &[u32]) {
        log::trace!("GP0(01): clear texture cache");
    }

    /// GP0(0x1F): Interrupt Request
    ///
    /// Raises IRQ1 in the status register; cleared by GP1(0x02).
    pub(in crate::core::gpu) fn cmd_request_irq(&mut self, _words: &[u32]) {
        self.status.insert(StatusFlags::INTERRUPT_REQUEST);
        log::debug!("GP0(1F): IRQ1 requested");
    }

    /// GP0(E1h): Draw Mode Setting (aka "Texpage")
    ///
    /// # Command Format
    ///
    /// ```text
    /// Bit 0-3:   Texture page X base   (N×64)
    /// Bit 4:     Texture page Y base   (0 or 256)
    /// Bit 5-6:   Semi-transparency     (0=B/2+F/2, 1=B+F, 2=B-F, 3=B+F/4)
    /// Bit 7-8:   Texture page colors   (0=4bit, 1=8bit, 2=15bit)
    /// Bit 9:     Dithering enabled
    /// Bit 10:    Drawing to display area allowed
    /// Bit 11:    Texture disable
    /// Bit 12:    Textured rectangle X-flip
    /// Bit 13:    Textured rectangle Y-flip
    /// ```
    pub(in crate::core::gpu) fn cmd_draw_mode(&mut self, words: &[u32]) {
        let value = words[0];

        self.apply_texpage(TexturePage::from_bits(value as u16));
        self.draw_mode.dithering = value & (1 << 9) != 0;
        self.draw_mode.draw_to_display = value & (1 << 10) != 0;
        self.draw_mode.texture_disable = value & (1 << 11) != 0;
        self.draw_mode.texture_x_flip = value & (1 << 12) != 0;
        self.draw_mode.texture_y_flip = value & (1 << 13) != 0;

        self.status
            .set(StatusFlags::DITHERING, self.draw_mode.dithering);
        self.status
            .set(StatusFlags::DRAW_TO_DISPLAY, self.draw_mode.draw_to_display);
        self.status
            .set(StatusFlags::TEXTURE_DISABLE, self.draw_mode.texture_disable);
    }

    /// GP0(E2h): Texture Window Setting
    ///
    /// All four fields are 5-bit values in 8-texel steps: mask X bits 0-4,
    /// mask Y bits 5-9, offset X bits 10-14, offset Y bits 15-19.
    pub(in crate::core::gpu) fn cmd_texture_window(&mut self, words: &[u32]) {
        let value = words[0];

        self.texture_window.mask_x = (value & 0x1F) as u8;
        self.texture_window.mask_y = ((value >> 5) & 0x1F) as u8;
        self.texture_window.offset_x = ((value >> 10) & 0x1F) as u8;
        self.texture_window.offset_y = ((value >> 15) & 0x1F) as u8;
    }

    /// GP0(E3h): Set Drawing Area Top-Left
    ///
    /// X bits 0-9, Y bits 10-18.
    pub(in crate::core::gpu) fn cmd_draw_area_top_left(&mut self, words: &[u32]) {
        let value = words[0];

        self.draw_area.left = (value & 0x3FF) as u16;
        self.draw_area.top = ((value >> 10) & 0x1FF) as u16;
    }

    /// GP0(E4h): Set Drawing Area Bottom-Right
    ///
    /// X bits 0-9, Y bits 10-18; inclusive bounds.
    pub(in crate::core::gpu) fn cmd_draw_area_bottom_right(&mut self, words: &[u32]) {
        let value = words[0];

        self.draw_area.right = (value & 0x3FF) as u16;
        self.draw_area.bottom = ((value >> 10) & 0x1FF) as u16;
    }

    /// GP0(E5h): Set Drawing Offset
    ///
    /// X bits 0-10 and Y bits 11-21, both 11-bit signed; added to every
    /// vertex before rendering.
    pub(in crate::core::gpu) fn cmd_draw_offset(&mut self, words: &[u32]) {
        let value = words[0];

        // Repack into the vertex layout so the same sign-extension applies
        let packed = (value & 0x7FF) | (((value >> 11) & 0x7FF) << 16);
        let v = Vertex::from_word(packed);
        self.draw_offset = (v.x, v.y);
    }

    /// GP0(E6h): Mask Bit Setting
    ///
    /// Bit 0 sets the mask bit on drawn texels; bit 1 write-protects
    /// texels whose mask bit is already set.
    pub(in crate::core::gpu) fn cmd_mask_settings(&mut self, words: &[u32]) {
        let value = words[0];

        self.mask.set_mask_bit = value & 1 != 0;
        self.mask.check_mask_bit = value & 2 != 0;

        self.status
            .set(StatusFlags::SET_MASK_BIT, self.mask.set_mask_bit);
        self.status
            .set(StatusFlags::CHECK_MASK_BIT, self.mask.check_mask_bit);
    }
}
