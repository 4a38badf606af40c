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

//! Primitive decoders and renderer records
//!
//! Each drawing family gets a view type over the finished command buffer
//! with typed accessors over the word layout, plus an owned [`Primitive`]
//! record that is queued for the renderer together with a snapshot of the
//! current attribute context. The shading/texture/quad combination is a
//! runtime tag derived from the command id bits, so one accessor
//! implementation covers each family.
//!
//! # Polygon word layout
//!
//! ```text
//! Flat:          cmd+color, v1, [t1], v2, [t2], v3, [t3], (v4, [t4])
//! Gouraud:       cmd+color1, v1, [t1], color2, v2, [t2], ...
//! ```
//!
//! The first texcoord word carries the CLUT attribute in its upper
//! halfword; the second carries the texture page attribute.

use super::fields::{self, Color, TexCoord, TexturePage, Vertex};
use super::registers::{DrawMode, DrawingArea, MaskSettings, TextureWindow};

/// Snapshot of the rendering attribute context at dispatch time
///
/// Captured once per geometry dispatch and handed to the renderer with the
/// decoded primitive, so later attribute commands cannot retroactively
/// change a queued primitive.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSnapshot {
    /// Current drawing mode (texture page, transparency, dithering)
    pub draw_mode: DrawMode,

    /// Current texture window
    pub texture_window: TextureWindow,

    /// Current drawing area (clip rectangle)
    pub draw_area: DrawingArea,

    /// Current drawing offset, added to all vertex coordinates
    pub draw_offset: (i16, i16),

    /// Current mask-bit policy
    pub mask: MaskSettings,
}

/// Texture sampling info decoded from a textured polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRef {
    /// CLUT base position in VRAM (X in steps of 16 texels)
    pub clut: (u16, u16),

    /// Texture page attribute
    pub page: TexturePage,
}

/// A decoded drawing primitive ready for the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Three-vertex polygon
    Triangle {
        vertices: [Vertex; 3],
        colors: [Color; 3],
        texcoords: Option<[TexCoord; 3]>,
        texture: Option<TextureRef>,
        semi_transparent: bool,
        raw_texture: bool,
    },

    /// Four-vertex polygon (rendered as two triangles by backends)
    Quad {
        vertices: [Vertex; 4],
        colors: [Color; 4],
        texcoords: Option<[TexCoord; 4]>,
        texture: Option<TextureRef>,
        semi_transparent: bool,
        raw_texture: bool,
    },

    /// Line or poly-line strip; one (vertex, color) pair per point
    Line {
        points: Vec<(Vertex, Color)>,
        semi_transparent: bool,
    },

    /// Tile or sprite
    Rect {
        top_left: Vertex,
        width: u16,
        height: u16,
        color: Color,
        texcoord: Option<TexCoord>,
        clut: Option<(u16, u16)>,
        semi_transparent: bool,
        raw_texture: bool,
    },
}

/// View over a buffered polygon command
///
/// Tags are derived from the command id: bit 4 Gouraud shading, bit 3
/// quad, bit 2 textured, bit 1 semi-transparent, bit 0 raw texture.
#[derive(Debug, Clone, Copy)]
pub struct PolygonView<'a> {
    words: &'a [u32],
    shaded: bool,
    textured: bool,
    quad: bool,
}

impl<'a> PolygonView<'a> {
    /// Wrap a finished polygon command buffer
    pub fn new(words: &'a [u32]) -> Self {
        let id = fields::command_id(words[0]);
        Self {
            words,
            shaded: id & 0x10 != 0,
            textured: id & 0x04 != 0,
            quad: id & 0x08 != 0,
        }
    }

    /// Number of vertices (3 or 4)
    pub fn vertex_count(&self) -> usize {
        if self.quad {
            4
        } else {
            3
        }
    }

    /// Declared word length for this shading/texture/quad combination
    pub fn word_len(&self) -> usize {
        let n = self.vertex_count();
        1 + n
            + if self.textured { n } else { 0 }
            + if self.shaded { n - 1 } else { 0 }
    }

    /// Words per vertex block
    fn stride(&self) -> usize {
        1 + self.textured as usize + self.shaded as usize
    }

    /// Vertex `i` (relative, signed per the 11-bit rule)
    pub fn vertex(&self, i: usize) -> Vertex {
        Vertex::from_word(self.words[1 + i * self.stride()])
    }

    /// Color of vertex `i`
    ///
    /// Flat polygons return the command-word color for every vertex;
    /// Gouraud polygons read the per-vertex color slot.
    pub fn color(&self, i: usize) -> Color {
        if self.shaded && i > 0 {
            Color::from_word(self.words[i * self.stride()])
        } else {
            Color::from_word(self.words[0])
        }
    }

    /// Texture coordinate of vertex `i` (textured polygons only)
    pub fn texcoord(&self, i: usize) -> TexCoord {
        TexCoord::from_word(self.words[2 + i * self.stride()])
    }

    /// CLUT attribute from the first texcoord word
    pub fn clut(&self) -> (u16, u16) {
        fields::clut_base(self.words[2])
    }

    /// Texture page attribute from the second texcoord word
    pub fn texpage(&self) -> TexturePage {
        TexturePage::from_attribute(self.words[2 + self.stride()])
    }

    /// Decode to an owned renderer record
    pub fn decode(&self) -> Primitive {
        let id = fields::command_id(self.words[0]);
        let semi_transparent = id & 0x02 != 0;
        let raw_texture = self.textured && id & 0x01 != 0;
        let texture = self.textured.then(|| TextureRef {
            clut: self.clut(),
            page: self.texpage(),
        });

        if self.quad {
            let vertices = std::array::from_fn(|i| self.vertex(i));
            let colors = std::array::from_fn(|i| self.color(i));
            let texcoords = self.textured.then(|| std::array::from_fn(|i| self.texcoord(i)));
            Primitive::Quad {
                vertices,
                colors,
                texcoords,
                texture,
                semi_transparent,
                raw_texture,
            }
        } else {
            let vertices = std::array::from_fn(|i| self.vertex(i));
            let colors = std::array::from_fn(|i| self.color(i));
            let texcoords = self.textured.then(|| std::array::from_fn(|i| self.texcoord(i)));
            Primitive::Triangle {
                vertices,
                colors,
                texcoords,
                texture,
                semi_transparent,
                raw_texture,
            }
        }
    }
}

/// View over a buffered line or poly-line command
///
/// Id bit 4 selects Gouraud shading, bit 3 poly-line framing. Shaded
/// strips consume (color, vertex) pairs; the terminator only ever appears
/// in a color slot, which keeps pair alignment intact.
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    words: &'a [u32],
    shaded: bool,
    polyline: bool,
}

impl<'a> LineView<'a> {
    /// Wrap a finished line command buffer
    pub fn new(words: &'a [u32]) -> Self {
        let id = fields::command_id(words[0]);
        Self {
            words,
            shaded: id & 0x10 != 0,
            polyline: id & 0x08 != 0,
        }
    }

    /// Decode to an owned renderer record
    ///
    /// Poly-line buffers may end with the termination word (or with a
    /// forced maximum-length cut); the terminator is not a point.
    pub fn decode(&self) -> Primitive {
        let id = fields::command_id(self.words[0]);
        let semi_transparent = id & 0x02 != 0;
        let mut points = Vec::new();

        if self.shaded {
            // Pairs of (color, vertex); word 0 doubles as the first color
            let mut i = 0;
            while i + 1 < self.words.len() {
                let color_word = self.words[i];
                if i > 0 && fields::is_polyline_terminator(color_word) {
                    break;
                }
                points.push((
                    Vertex::from_word(self.words[i + 1]),
                    Color::from_word(color_word),
                ));
                i += 2;
            }
        } else {
            let color = Color::from_word(self.words[0]);
            for &word in &self.words[1..] {
                if self.polyline && fields::is_polyline_terminator(word) {
                    break;
                }
                points.push((Vertex::from_word(word), color));
            }
        }

        Primitive::Line {
            points,
            semi_transparent,
        }
    }
}

/// Tile/sprite size class, implied by command id bits 3-4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectSize {
    /// Explicit width/height word at the end of the command
    Variable,
    /// 1×1 tile
    One,
    /// 8×8 tile
    Eight,
    /// 16×16 tile
    Sixteen,
}

impl RectSize {
    /// Derive the size class from a rectangle command id
    pub fn from_id(id: u8) -> Self {
        match (id >> 3) & 3 {
            0 => RectSize::Variable,
            1 => RectSize::One,
            2 => RectSize::Eight,
            _ => RectSize::Sixteen,
        }
    }
}

/// View over a buffered tile/sprite command
#[derive(Debug, Clone, Copy)]
pub struct RectView<'a> {
    words: &'a [u32],
    textured: bool,
    size: RectSize,
}

impl<'a> RectView<'a> {
    /// Wrap a finished rectangle command buffer
    pub fn new(words: &'a [u32]) -> Self {
        let id = fields::command_id(words[0]);
        Self {
            words,
            textured: id & 0x04 != 0,
            size: RectSize::from_id(id),
        }
    }

    /// Declared word length for this size/texture combination
    pub fn word_len(&self) -> usize {
        2 + self.textured as usize + (self.size == RectSize::Variable) as usize
    }

    /// Width and height in texels
    pub fn size(&self) -> (u16, u16) {
        match self.size {
            RectSize::One => (1, 1),
            RectSize::Eight => (8, 8),
            RectSize::Sixteen => (16, 16),
            RectSize::Variable => {
                fields::rect_size(self.words[2 + self.textured as usize])
            }
        }
    }

    /// Decode to an owned renderer record
    pub fn decode(&self) -> Primitive {
        let id = fields::command_id(self.words[0]);
        let (width, height) = self.size();
        let texcoord = self.textured.then(|| TexCoord::from_word(self.words[2]));
        let clut = self.textured.then(|| fields::clut_base(self.words[2]));

        Primitive::Rect {
            top_left: Vertex::from_word(self.words[1]),
            width,
            height,
            color: Color::from_word(self.words[0]),
            texcoord,
            clut,
            semi_transparent: id & 0x02 != 0,
            raw_texture: self.textured && id & 0x01 != 0,
        }
    }
}

/// View over a buffered image-transfer header
///
/// Move uses a 4-word header (cmd, src, dst, size); load and store use a
/// 3-word header (cmd, xy, size). The pixel payload never enters the
/// command buffer: after a load dispatch the assembler switches into
/// transfer-passthrough.
#[derive(Debug, Clone, Copy)]
pub struct TransferView<'a> {
    words: &'a [u32],
}

impl<'a> TransferView<'a> {
    /// Wrap a finished transfer header
    pub fn new(words: &'a [u32]) -> Self {
        Self { words }
    }

    /// Source coordinates (move) or target coordinates (load/store)
    pub fn source(&self) -> (u16, u16) {
        fields::vram_coords(self.words[1])
    }

    /// Destination coordinates (move only)
    pub fn destination(&self) -> (u16, u16) {
        fields::vram_coords(self.words[2])
    }

    /// Normalized transfer extent (1-1024 × 1-512)
    pub fn size(&self) -> (u16, u16) {
        fields::transfer_size(*self.words.last().unwrap_or(&0))
    }

    /// Payload length in 32-bit words (two texels per word, rounded up)
    pub fn payload_words(&self) -> usize {
        let (w, h) = self.size();
        (w as usize * h as usize).div_ceil(2)
    }
}
