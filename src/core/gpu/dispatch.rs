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

//! GP0 dispatch table
//!
//! A fixed 256-entry lookup from command id to expected word count and
//! handler, built once at startup and immutable thereafter. The hardware
//! mirrors its command families across id ranges (every id in 0x80-0x9F is
//! the VRAM move, and so on), so the table is generated with range loops
//! over the id bit patterns rather than spelled out row by row.

use std::sync::OnceLock;

use super::primitives::{PolygonView, RectSize};
use super::GPU;

/// Expected word count for a command id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandLength {
    /// Fixed number of words including the command word
    Fixed(u8),

    /// Variable-length poly-line framing: dispatch once `min` words are
    /// buffered and the latest word matches the terminator, or forcibly
    /// at `max` words.
    Variable { min: u8, max: u8 },
}

/// GP0 command handler
pub type Handler = fn(&mut GPU, &[u32]);

/// One immutable dispatch row
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    /// Expected word count
    pub length: CommandLength,

    /// Full handler invoked on dispatch
    pub handler: Handler,

    /// Whether the frame-skip path may replace the handler with a
    /// side-effect-free consume (drawing families only)
    pub skippable: bool,
}

/// The 256-entry GP0 dispatch table
pub struct DispatchTable {
    entries: [DispatchEntry; 256],
}

fn cmd_ignore(_gpu: &mut GPU, words: &[u32]) {
    log::debug!("Unknown GP0 command: 0x{:08X}", words[0]);
}

impl DispatchTable {
    /// Shared immutable instance, built on first use
    pub fn global() -> &'static DispatchTable {
        static TABLE: OnceLock<DispatchTable> = OnceLock::new();
        TABLE.get_or_init(DispatchTable::build)
    }

    /// Look up the entry for a command id
    #[inline(always)]
    pub fn entry(&self, id: u8) -> &DispatchEntry {
        &self.entries[id as usize]
    }

    fn build() -> Self {
        // Unknown opcodes: consume one word silently, stay idle
        let unknown = DispatchEntry {
            length: CommandLength::Fixed(1),
            handler: cmd_ignore,
            skippable: false,
        };
        let mut entries = [unknown; 256];

        // 0x00 NOP / 0x01 clear texture cache: one-word no-ops
        entries[0x00] = DispatchEntry {
            length: CommandLength::Fixed(1),
            handler: GPU::cmd_nop,
            skippable: false,
        };
        entries[0x01] = DispatchEntry {
            length: CommandLength::Fixed(1),
            handler: GPU::cmd_clear_cache,
            skippable: false,
        };

        // 0x02 fill rectangle
        entries[0x02] = DispatchEntry {
            length: CommandLength::Fixed(3),
            handler: GPU::cmd_fill_rect,
            skippable: true,
        };

        // 0x1F IRQ1 request
        entries[0x1F] = DispatchEntry {
            length: CommandLength::Fixed(1),
            handler: GPU::cmd_request_irq,
            skippable: false,
        };

        // 0x20-0x3F polygons: length follows the shaded/quad/textured id
        // bits (flat tri 4, textured tri 7, quad 5, textured quad 9; each
        // shaded form adds one word per vertex beyond the first)
        for id in 0x20..=0x3Fu8 {
            let len = PolygonView::new(&[(id as u32) << 24]).word_len() as u8;
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(len),
                handler: GPU::cmd_polygon,
                skippable: true,
            };
        }

        // 0x40-0x5F lines: bit 3 selects poly-line framing, bit 4 Gouraud
        for id in 0x40..=0x5Fu8 {
            let shaded = id & 0x10 != 0;
            let length = if id & 0x08 != 0 {
                if shaded {
                    CommandLength::Variable { min: 4, max: 255 }
                } else {
                    CommandLength::Variable { min: 3, max: 254 }
                }
            } else if shaded {
                CommandLength::Fixed(4)
            } else {
                CommandLength::Fixed(3)
            };
            entries[id as usize] = DispatchEntry {
                length,
                handler: GPU::cmd_line,
                skippable: true,
            };
        }

        // 0x60-0x7F tiles/sprites: size class from bits 3-4, texcoord word
        // from bit 2
        for id in 0x60..=0x7Fu8 {
            let textured = id & 0x04 != 0;
            let variable = RectSize::from_id(id) == RectSize::Variable;
            let len = 2 + textured as u8 + variable as u8;
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(len),
                handler: GPU::cmd_rect,
                skippable: true,
            };
        }

        // Image transfers, mirrored across their whole id ranges
        for id in 0x80..=0x9Fu8 {
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(4),
                handler: GPU::cmd_vram_move,
                skippable: false,
            };
        }
        for id in 0xA0..=0xBFu8 {
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(3),
                handler: GPU::cmd_vram_load,
                skippable: false,
            };
        }
        for id in 0xC0..=0xDFu8 {
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(3),
                handler: GPU::cmd_vram_store,
                skippable: false,
            };
        }

        // 0xE1-0xE6 attribute settings: always executed, even on skipped
        // frames, since later commands depend on the state they set
        let attr_handlers: [(u8, Handler); 6] = [
            (0xE1, GPU::cmd_draw_mode),
            (0xE2, GPU::cmd_texture_window),
            (0xE3, GPU::cmd_draw_area_top_left),
            (0xE4, GPU::cmd_draw_area_bottom_right),
            (0xE5, GPU::cmd_draw_offset),
            (0xE6, GPU::cmd_mask_settings),
        ];
        for (id, handler) in attr_handlers {
            entries[id as usize] = DispatchEntry {
                length: CommandLength::Fixed(1),
                handler,
                skippable: false,
            };
        }

        Self { entries }
    }
}

/// Maximum words any single command may buffer
pub const MAX_COMMAND_WORDS: usize = 256;
