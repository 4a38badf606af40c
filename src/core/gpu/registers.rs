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

//! Rendering attribute context
//!
//! Mutable state set by the GP0(E1)-GP0(E6) attribute commands and read by
//! every subsequent geometry command until overwritten: texture page,
//! texture window, drawing area, drawing offset, and mask-bit policy.
//! Display-side settings (display area, display mode) live here too; they
//! are driven by the GP1 control channel.

use super::fields::TextureDepth;

/// Drawing mode configuration (GP0(E1), aka "texpage")
#[derive(Debug, Clone, Copy)]
pub struct DrawMode {
    /// Texture page base X in texels (N×64)
    pub texture_page_x: u16,

    /// Texture page base Y in texels (0 or 256)
    pub texture_page_y: u16,

    /// Semi-transparency mode (0-3)
    ///
    /// - 0: 0.5×Back + 0.5×Front (average)
    /// - 1: 1.0×Back + 1.0×Front (additive)
    /// - 2: 1.0×Back - 1.0×Front (subtractive)
    /// - 3: 1.0×Back + 0.25×Front (additive with quarter)
    pub semi_transparency: u8,

    /// Texture color depth
    pub texture_depth: TextureDepth,

    /// Dithering enabled
    pub dithering: bool,

    /// Drawing to display area allowed
    pub draw_to_display: bool,

    /// Texture disable (draw solid colors instead of textured)
    pub texture_disable: bool,

    /// Textured rectangle X-flip
    pub texture_x_flip: bool,

    /// Textured rectangle Y-flip
    pub texture_y_flip: bool,
}

impl Default for DrawMode {
    fn default() -> Self {
        Self {
            texture_page_x: 0,
            texture_page_y: 0,
            semi_transparency: 0,
            texture_depth: TextureDepth::T4Bit,
            dithering: false,
            draw_to_display: false,
            texture_disable: false,
            texture_x_flip: false,
            texture_y_flip: false,
        }
    }
}

/// Texture window settings (GP0(E2))
///
/// Controls texture coordinate wrapping and masking within a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureWindow {
    /// Window mask X (in 8-texel steps)
    pub mask_x: u8,

    /// Window mask Y (in 8-texel steps)
    pub mask_y: u8,

    /// Window offset X (in 8-texel steps)
    pub offset_x: u8,

    /// Window offset Y (in 8-texel steps)
    pub offset_y: u8,
}

/// Drawing area (GP0(E3)/GP0(E4), clipping rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingArea {
    /// Left edge X coordinate (inclusive)
    pub left: u16,

    /// Top edge Y coordinate (inclusive)
    pub top: u16,

    /// Right edge X coordinate (inclusive)
    pub right: u16,

    /// Bottom edge Y coordinate (inclusive)
    pub bottom: u16,
}

impl Default for DrawingArea {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            right: 1023,
            bottom: 511,
        }
    }
}

/// Mask-bit policy (GP0(E6))
///
/// Consulted by VRAM copy/write operations and carried on every attribute
/// snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskSettings {
    /// Set bit 15 on every written texel
    pub set_mask_bit: bool,

    /// Skip writes to texels whose bit 15 is already set
    pub check_mask_bit: bool,
}

/// Display area configuration (GP1(0x05))
///
/// Defines the region of VRAM that is output to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayArea {
    /// Display origin X coordinate in VRAM
    pub x: u16,

    /// Display origin Y coordinate in VRAM
    pub y: u16,

    /// Horizontal display range (X1, X2) in GPU clocks
    pub h_range: (u16, u16),

    /// Vertical display range (Y1, Y2) in scanlines
    pub v_range: (u16, u16),
}

impl Default for DisplayArea {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            h_range: (0x200, 0x200 + 2560),
            v_range: (0x10, 0x10 + 240),
        }
    }
}

/// Image transfer direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// Stream→VRAM (GP0 0xA0): assembler passthrough routes payload
    /// words straight to VRAM
    CpuToVram,
    /// VRAM→stream (GP0 0xC0): payload is read back through GPUREAD
    VramToCpu,
}

/// Progress of an in-flight image transfer
#[derive(Debug, Clone)]
pub struct VramTransfer {
    /// Transfer origin X coordinate
    pub x: u16,

    /// Transfer origin Y coordinate
    pub y: u16,

    /// Transfer width in texels
    pub width: u16,

    /// Transfer height in texels
    pub height: u16,

    /// Current X position within the rectangle
    pub current_x: u16,

    /// Current Y position within the rectangle
    pub current_y: u16,

    /// Transfer direction
    pub direction: TransferDirection,
}

impl VramTransfer {
    /// Advance one texel in row-major order; true while inside the rectangle
    pub fn advance(&mut self) -> bool {
        self.current_x += 1;
        if self.current_x >= self.width {
            self.current_x = 0;
            self.current_y += 1;
        }
        self.current_y < self.height
    }

    /// Whether every texel of the rectangle has been visited
    pub fn is_complete(&self) -> bool {
        self.current_y >= self.height
    }
}
