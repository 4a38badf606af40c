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

//! GP0 tile/sprite commands (0x60-0x7F)
//!
//! Axis-aligned rectangles: 1×1, 8×8, and 16×16 tiles whose size is
//! implied by the command id, plus a custom-size form carrying an explicit
//! width/height word. Textured variants ("sprites") carry one
//! CLUT/texcoord word and sample the current texture page.

use super::super::primitives::RectView;
use super::super::GPU;

impl GPU {
    /// GP0(0x60-0x7F): Tile / Sprite
    ///
    /// Decodes the buffered command into a rectangle record and queues it
    /// with the current attribute snapshot. Unlike polygons, sprites have
    /// no texture-page word of their own; they rely on the page set by
    /// GP0(E1).
    pub(in crate::core::gpu) fn cmd_rect(&mut self, words: &[u32]) {
        let view = RectView::new(words);
        debug_assert_eq!(words.len(), view.word_len());

        let id = (words[0] >> 24) & 0xFF;
        log::trace!("GP0({:02X}): rect, {} words", id, words.len());

        let primitive = view.decode();
        self.queue_primitive(primitive);
    }
}
