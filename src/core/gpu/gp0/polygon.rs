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

//! GP0 polygon drawing commands (0x20-0x3F)
//!
//! Triangles and quadrilaterals, flat or Gouraud shaded, optionally
//! textured. The shading/texture/quad combination is encoded in the
//! command id bits and drives both the expected word count and the
//! decoder tag.

use super::super::primitives::PolygonView;
use super::super::GPU;

impl GPU {
    /// GP0(0x20-0x3F): Polygon
    ///
    /// Decodes the buffered command into a triangle or quad record and
    /// queues it with the current attribute snapshot. Textured polygons
    /// additionally latch their texture-page attribute into the drawing
    /// mode and status register, as the hardware does.
    pub(in crate::core::gpu) fn cmd_polygon(&mut self, words: &[u32]) {
        let view = PolygonView::new(words);
        debug_assert_eq!(words.len(), view.word_len());

        let id = (words[0] >> 24) & 0xFF;
        if id & 0x04 != 0 {
            self.apply_texpage(view.texpage());
        }

        log::trace!("GP0({:02X}): polygon, {} words", id, words.len());

        let primitive = view.decode();
        self.queue_primitive(primitive);
    }
}
