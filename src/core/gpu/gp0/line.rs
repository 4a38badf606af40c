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

//! GP0 line drawing commands (0x40-0x5F)
//!
//! Fixed two-vertex lines and variable-length poly-lines. Poly-line
//! framing (the terminator scan and forced maximum) happens in the
//! assembler; by the time a handler runs, the buffer holds the complete
//! strip, terminator included when one was seen.

use super::super::primitives::LineView;
use super::super::GPU;

impl GPU {
    /// GP0(0x40-0x5F): Line / Poly-line
    ///
    /// Decodes the strip into a line record, one (vertex, color) pair per
    /// point, and queues it with the current attribute snapshot.
    pub(in crate::core::gpu) fn cmd_line(&mut self, words: &[u32]) {
        let id = (words[0] >> 24) & 0xFF;
        log::trace!("GP0({:02X}): line, {} words", id, words.len());

        let primitive = LineView::new(words).decode();
        self.queue_primitive(primitive);
    }
}
