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

//! Command word field extraction
//!
//! Stateless helpers that pull typed fields out of raw 32-bit GP0/GP1
//! command words. Every function matches the hardware field layout exactly:
//! no rounding, no clamping unless the hardware itself does it.
//!
//! # References
//!
//! - [PSX-SPX: GPU Render Commands](http://problemkaputt.de/psx-spx.htm#gpurenderpolygoncommands)

/// Extract the command id from the first word of a command
///
/// The command id occupies bits 24-31 of the first word.
#[inline(always)]
pub fn command_id(word: u32) -> u8 {
    (word >> 24) as u8
}

/// Test a word against the poly-line termination pattern
///
/// Poly-lines are terminated by a sentinel word rather than a declared
/// length. The canonical terminator is `0x5555_5555`, but some legacy
/// command producers emit `0x5000_5000`; the hardware accepts any word
/// where the masked nibbles match, so both must be recognized.
#[inline(always)]
pub fn is_polyline_terminator(word: u32) -> bool {
    (word & 0xF000_F000) == 0x5000_5000
}

/// A 24-bit RGB color carried in GPU commands
///
/// Command colors are 8 bits per channel and are reduced to the 5-5-5
/// VRAM format by truncation when drawn.
///
/// # Examples
///
/// ```
/// use psgpu::core::gpu::Color;
///
/// let color = Color::from_word(0x00FF8040);
/// assert_eq!(color.r, 0x40);
/// assert_eq!(color.g, 0x80);
/// assert_eq!(color.b, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Create a Color from bits 0-23 of a command word
    ///
    /// - Bits 0-7: Red
    /// - Bits 8-15: Green
    /// - Bits 16-23: Blue
    pub fn from_word(word: u32) -> Self {
        Self {
            r: (word & 0xFF) as u8,
            g: ((word >> 8) & 0xFF) as u8,
            b: ((word >> 16) & 0xFF) as u8,
        }
    }

    /// Convert to the 15-bit 5-5-5 VRAM format
    ///
    /// Each 8-bit channel keeps only its top 5 bits (plain right shift,
    /// no rounding). Bit 15 (the mask bit) is left clear.
    ///
    /// # Examples
    ///
    /// ```
    /// use psgpu::core::gpu::Color;
    ///
    /// let color = Color { r: 255, g: 128, b: 64 };
    /// let rgb15 = color.to_rgb15();
    ///
    /// assert_eq!(rgb15 & 0x1F, 31);        // R: 255 >> 3 = 31
    /// assert_eq!((rgb15 >> 5) & 0x1F, 16); // G: 128 >> 3 = 16
    /// assert_eq!((rgb15 >> 10) & 0x1F, 8); // B: 64 >> 3 = 8
    /// ```
    pub fn to_rgb15(&self) -> u16 {
        let r = (self.r as u16) >> 3;
        let g = (self.g as u16) >> 3;
        let b = (self.b as u16) >> 3;
        (b << 10) | (g << 5) | r
    }
}

/// A vertex position from a geometry command word
///
/// Vertex coordinates are 11-bit two's-complement fields, sign-extended to
/// the range [-1024, 1023]. X occupies bits 0-10, Y bits 16-26; the
/// remaining bits of each halfword are ignored by the hardware.
///
/// # Examples
///
/// ```
/// use psgpu::core::gpu::Vertex;
///
/// let v = Vertex::from_word(0x00640032);
/// assert_eq!(v.x, 50);
/// assert_eq!(v.y, 100);
///
/// // 11-bit wraparound: 0x7FF sign-extends to -1
/// let v = Vertex::from_word(0x07FF07FF);
/// assert_eq!(v.x, -1);
/// assert_eq!(v.y, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    /// X coordinate, sign-extended from 11 bits
    pub x: i16,
    /// Y coordinate, sign-extended from 11 bits
    pub y: i16,
}

impl Vertex {
    /// Decode a vertex from a command word
    pub fn from_word(word: u32) -> Self {
        Self {
            x: sign_extend_11(word & 0x7FF),
            y: sign_extend_11((word >> 16) & 0x7FF),
        }
    }
}

/// Sign-extend an 11-bit field to i16
#[inline(always)]
fn sign_extend_11(field: u32) -> i16 {
    ((field as i16) << 5) >> 5
}

/// A texture coordinate from a textured primitive word
///
/// U occupies bits 0-7, V bits 8-15 of the texcoord word. The upper
/// halfword of the same word carries the CLUT or texture-page attribute,
/// extracted separately by [`clut_base`] and [`TexturePage::from_attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexCoord {
    /// U coordinate (horizontal, 0-255)
    pub u: u8,
    /// V coordinate (vertical, 0-255)
    pub v: u8,
}

impl TexCoord {
    /// Decode a texture coordinate from the low halfword
    pub fn from_word(word: u32) -> Self {
        Self {
            u: (word & 0xFF) as u8,
            v: ((word >> 8) & 0xFF) as u8,
        }
    }
}

/// Extract the CLUT base position from a texcoord word
///
/// The CLUT attribute sits in bits 16-31 of the first texcoord word of a
/// textured primitive: X in steps of 16 texels (bits 16-21), Y in steps of
/// 1 row (bits 22-30).
///
/// # Examples
///
/// ```
/// use psgpu::core::gpu::fields::clut_base;
///
/// let (x, y) = clut_base(0x7FFF_0000);
/// assert_eq!(x, 63 * 16);
/// assert_eq!(y, 511);
/// ```
pub fn clut_base(word: u32) -> (u16, u16) {
    let attr = (word >> 16) as u16;
    let x = (attr & 0x3F) * 16;
    let y = (attr >> 6) & 0x1FF;
    (x, y)
}

/// Texture color depth modes
///
/// 4-bit and 8-bit textures index a CLUT stored elsewhere in VRAM;
/// 15-bit textures are direct color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureDepth {
    /// 4-bit indexed color (16-color CLUT)
    T4Bit,
    /// 8-bit indexed color (256-color CLUT)
    T8Bit,
    /// 15-bit direct color (no CLUT)
    T15Bit,
}

impl From<u8> for TextureDepth {
    fn from(value: u8) -> Self {
        match value {
            0 => TextureDepth::T4Bit,
            1 => TextureDepth::T8Bit,
            _ => TextureDepth::T15Bit,
        }
    }
}

/// A decoded texture-page attribute
///
/// The texpage attribute occupies bits 16-31 of the second texcoord word
/// of textured polygons, and the low 9 bits of GP0(E1):
/// - Bits 0-3: page X base in steps of 64 texels
/// - Bit 4: page Y base (0 or 256)
/// - Bits 5-6: semi-transparency mode
/// - Bits 7-8: texture color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexturePage {
    /// Page X base in texels (N×64)
    pub x_base: u16,
    /// Page Y base in texels (0 or 256)
    pub y_base: u16,
    /// Semi-transparency mode (0-3)
    pub semi_transparency: u8,
    /// Texture color depth
    pub depth: TextureDepth,
}

impl TexturePage {
    /// Decode from the upper halfword of a polygon texcoord word
    pub fn from_attribute(word: u32) -> Self {
        Self::from_bits((word >> 16) as u16)
    }

    /// Decode from the low 9 bits of a texpage value
    pub fn from_bits(bits: u16) -> Self {
        Self {
            x_base: (bits & 0x0F) * 64,
            y_base: ((bits >> 4) & 1) * 256,
            semi_transparency: ((bits >> 5) & 3) as u8,
            depth: TextureDepth::from(((bits >> 7) & 3) as u8),
        }
    }
}

/// Extract unsigned VRAM coordinates from a fill/transfer word
///
/// X occupies bits 0-9 (0-1023), Y bits 16-24 (0-511); excess bits wrap.
#[inline(always)]
pub fn vram_coords(word: u32) -> (u16, u16) {
    let x = (word & 0x3FF) as u16;
    let y = ((word >> 16) & 0x1FF) as u16;
    (x, y)
}

/// Extract a width/height pair from a size word
///
/// Sizes are unsigned 10/9-bit fields with no sign extension. No
/// zero-means-maximum normalization happens here; the VRAM operations
/// apply it where the hardware does.
#[inline(always)]
pub fn rect_size(word: u32) -> (u16, u16) {
    let w = (word & 0x3FF) as u16;
    let h = ((word >> 16) & 0x1FF) as u16;
    (w, h)
}

/// Extract a transfer width/height pair from a size word
///
/// Image transfers use 16-bit size fields where 0 means the maximum
/// extent: width is normalized into 1-1024, height into 1-512.
#[inline(always)]
pub fn transfer_size(word: u32) -> (u16, u16) {
    let w = ((word as u16).wrapping_sub(1) & 0x3FF).wrapping_add(1);
    let h = (((word >> 16) as u16).wrapping_sub(1) & 0x1FF).wrapping_add(1);
    (w, h)
}
