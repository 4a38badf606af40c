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

//! GPU (Graphics Processing Unit) command core
//!
//! This module implements the command-processing core of the Sony CXD8561Q
//! GPU used in the PlayStation console:
//! - Managing 1MB of VRAM (1024×512 texels, 16-bit per texel)
//! - Decoding GP0 (drawing/data) and GP1 (control) command streams
//! - Maintaining the packed GPUSTAT register and rendering attribute state
//! - Queuing decoded primitives for an external rendering backend
//!
//! Rasterization itself is out of scope: decoded primitives are handed to
//! the renderer together with a snapshot of the attribute context.
//!
//! # VRAM Layout
//!
//! VRAM is a 1024×512 framebuffer of 16-bit texels in 5-5-5 RGB format
//! with a mask flag in bit 15, used flexibly for display buffers,
//! textures, and color lookup tables (CLUTs). Coordinate arithmetic wraps
//! modulo (1024, 512), never clamps.
//!
//! # References
//!
//! - [PSX-SPX: GPU](http://problemkaputt.de/psx-spx.htm#gpu)
//! - [PSX-SPX: GPU Rendering](http://problemkaputt.de/psx-spx.htm#gpurenderstatecommands)

use std::collections::VecDeque;

// Module declarations
pub mod assembler;
pub mod dispatch;
pub mod fields;
pub mod freeze;
mod gp0;
mod gp1;
pub mod primitives;
pub mod registers;
pub mod status;
#[cfg(test)]
mod tests;
pub mod vram;

// Public re-exports
pub use fields::{Color, TexCoord, TextureDepth, TexturePage, Vertex};
pub use primitives::{AttributeSnapshot, Primitive};
pub use registers::{
    DisplayArea, DrawMode, DrawingArea, MaskSettings, TextureWindow, TransferDirection,
};
pub use status::{DmaDirection, StatusFlags, StatusRegister};
pub use vram::Vram;

use assembler::CommandAssembler;
use dispatch::DispatchTable;
use freeze::{FreezeData, FREEZE_VERSION};
use registers::VramTransfer;

/// The GPU display controller
///
/// Owns all mutable chip state (VRAM, the GPUSTAT register, the rendering
/// attribute context, and the command stream assembler) and is the only
/// component external collaborators talk to. The host feeds words into the
/// two channels; decoded primitives are drained from the renderer queue.
///
/// Single-threaded by design: every operation runs to completion within
/// the call that invoked it, and the controller assumes exclusive,
/// non-reentrant ownership by its caller.
///
/// # Examples
///
/// ```
/// use psgpu::core::GPU;
///
/// let mut gpu = GPU::new();
/// gpu.reset();
///
/// // Write a white texel to VRAM
/// gpu.write_vram(100, 100, 0x7FFF);
/// assert_eq!(gpu.read_vram(100, 100), 0x7FFF);
/// ```
pub struct GPU {
    /// Frame memory
    pub(in crate::core::gpu) vram: Vram,

    /// Packed GPUSTAT register
    pub(in crate::core::gpu) status: StatusRegister,

    /// Drawing mode (GP0(E1))
    pub(in crate::core::gpu) draw_mode: DrawMode,

    /// Texture window (GP0(E2))
    pub(in crate::core::gpu) texture_window: TextureWindow,

    /// Drawing area (GP0(E3)/GP0(E4))
    pub(in crate::core::gpu) draw_area: DrawingArea,

    /// Drawing offset (GP0(E5)), added to all vertex coordinates
    pub(in crate::core::gpu) draw_offset: (i16, i16),

    /// Mask-bit policy (GP0(E6))
    pub(in crate::core::gpu) mask: MaskSettings,

    /// Display area and scan ranges (GP1(0x05)-GP1(0x07))
    pub(in crate::core::gpu) display_area: DisplayArea,

    /// GP0 command stream assembler
    pub(in crate::core::gpu) assembler: CommandAssembler,

    /// In-flight image transfer, if any
    pub(in crate::core::gpu) vram_transfer: Option<VramTransfer>,

    /// GPUREAD readback value latched by GP1(0x10)
    pub(in crate::core::gpu) data_latch: u32,

    /// GP1 control latch array, one slot per raw command id; part of the
    /// freeze record
    pub(in crate::core::gpu) status_control: [u32; 256],

    /// Decoded primitives awaiting the renderer
    primitives: VecDeque<(Primitive, AttributeSnapshot)>,

    /// Immutable GP0 dispatch table, built once per process
    table: &'static DispatchTable,

    /// Frame-skip flag supplied by the external timing collaborator;
    /// sampled once per dispatch decision
    frame_skip: bool,

    /// Artificial-busy compatibility knob: number of status reads that
    /// report busy after each dispatch (None = disabled)
    busy_hack: Option<u8>,

    /// Remaining artificial-busy status reads
    busy_ticks: u8,
}

impl GPU {
    /// Create a new GPU with cleared VRAM and reset register state
    pub fn new() -> Self {
        Self {
            vram: Vram::new(),
            status: StatusRegister::new(),
            draw_mode: DrawMode::default(),
            texture_window: TextureWindow::default(),
            draw_area: DrawingArea::default(),
            draw_offset: (0, 0),
            mask: MaskSettings::default(),
            display_area: DisplayArea::default(),
            assembler: CommandAssembler::new(),
            vram_transfer: None,
            data_latch: 0,
            status_control: [0; 256],
            primitives: VecDeque::new(),
            table: DispatchTable::global(),
            frame_skip: false,
            busy_hack: None,
            busy_ticks: 0,
        }
    }

    /// Full reset: clears VRAM, all state, and the renderer queue
    ///
    /// Equivalent to a hardware power cycle. GP1(0x00) performs the
    /// weaker state reset that preserves VRAM.
    pub fn reset(&mut self) {
        self.reset_state_preserving_vram();
        self.vram.clear();
        self.status_control = [0; 256];
        self.primitives.clear();
        self.frame_skip = false;
    }

    /// Reset all register and context state without touching VRAM
    pub(in crate::core::gpu) fn reset_state_preserving_vram(&mut self) {
        self.status.reset();
        self.draw_mode = DrawMode::default();
        self.texture_window = TextureWindow::default();
        self.draw_area = DrawingArea::default();
        self.draw_offset = (0, 0);
        self.mask = MaskSettings::default();
        self.display_area = DisplayArea::default();
        self.assembler.reset();
        self.vram_transfer = None;
        self.data_latch = 0;
        self.busy_ticks = 0;
    }

    /// Read a 16-bit texel from VRAM; coordinates wrap modulo (1024, 512)
    #[inline(always)]
    pub fn read_vram(&self, x: u16, y: u16) -> u16 {
        self.vram.read(x, y)
    }

    /// Write a 16-bit texel to VRAM; coordinates wrap modulo (1024, 512)
    #[inline(always)]
    pub fn write_vram(&mut self, x: u16, y: u16, value: u16) {
        self.vram.write(x, y, value)
    }

    /// Serialize the full VRAM image as little-endian bytes
    pub fn vram_bytes(&self) -> Vec<u8> {
        self.vram.as_bytes()
    }

    /// Set the frame-skip flag supplied by the timing collaborator
    ///
    /// While set, drawing commands are consumed with identical word
    /// counts (stream alignment is preserved) but produce no primitive
    /// records and no VRAM mutation. Attribute and transfer commands
    /// always execute. The flag is sampled once per dispatch, never
    /// mid-command.
    pub fn set_frame_skip(&mut self, skip: bool) {
        self.frame_skip = skip;
    }

    /// Arm the artificial-busy compatibility behavior
    ///
    /// After each dispatch, the next `ticks` status reads report the GPU
    /// busy (idle bit clear) before reverting. Some games poll GPUSTAT
    /// for completion and misbehave when emulation is instantaneous.
    /// `None` disables the behavior.
    pub fn set_busy_hack(&mut self, ticks: Option<u8>) {
        self.busy_hack = ticks;
        if ticks.is_none() {
            self.busy_ticks = 0;
        }
    }

    /// Snapshot the current attribute context
    pub fn attribute_snapshot(&self) -> AttributeSnapshot {
        AttributeSnapshot {
            draw_mode: self.draw_mode,
            texture_window: self.texture_window,
            draw_area: self.draw_area,
            draw_offset: self.draw_offset,
            mask: self.mask,
        }
    }

    /// Queue a decoded primitive with the current attribute snapshot
    pub(in crate::core::gpu) fn queue_primitive(&mut self, primitive: Primitive) {
        let snapshot = self.attribute_snapshot();
        self.primitives.push_back((primitive, snapshot));
    }

    /// Drain all queued primitives for the renderer
    pub fn drain_primitives(&mut self) -> Vec<(Primitive, AttributeSnapshot)> {
        self.primitives.drain(..).collect()
    }

    /// Latch a texture-page attribute into the drawing mode and status
    /// register (GP0(E1) and textured polygon texpage words)
    pub(in crate::core::gpu) fn apply_texpage(&mut self, page: TexturePage) {
        self.draw_mode.texture_page_x = page.x_base;
        self.draw_mode.texture_page_y = page.y_base;
        self.draw_mode.semi_transparency = page.semi_transparency;
        self.draw_mode.texture_depth = page.depth;

        self.status.set_field(0, 4, (page.x_base / 64) as u32);
        self.status.set_field(4, 1, (page.y_base / 256) as u32);
        self.status.set_field(5, 2, page.semi_transparency as u32);
        self.status.set_field(
            7,
            2,
            match page.depth {
                TextureDepth::T4Bit => 0,
                TextureDepth::T8Bit => 1,
                TextureDepth::T15Bit => 2,
            },
        );
    }

    /// Process one GP0 (rendering/data channel) word
    ///
    /// Words belonging to an in-flight stream→VRAM load bypass command
    /// framing entirely; everything else is buffered by the assembler and
    /// dispatched once the command is complete.
    pub fn write_gp0(&mut self, word: u32) {
        // Transfer-passthrough: payload words go straight to VRAM
        if let Some(ref transfer) = self.vram_transfer {
            if transfer.direction == TransferDirection::CpuToVram {
                self.process_transfer_word(word);
                return;
            }
        }

        if let Some(id) = self.assembler.push_word(word, self.table) {
            let words = self.assembler.take_words();
            self.execute_gp0(id, &words);
        }
    }

    /// Feed a slice of GP0 words, DMA-style
    ///
    /// The host may deliver one word or thousands per call; partial
    /// commands survive across calls. If a word arrives while a VRAM→CPU
    /// store is pending (the host is expected to read, not write), that
    /// word is returned so the caller can re-present it to the control
    /// channel, mirroring the legacy handoff between the two channels
    /// during transfer mode switches. The interface has exactly one
    /// leftover slot: the caller must not continue the slice past a store
    /// setup, and any words after the re-presented one are dropped (and
    /// reported at warn level).
    pub fn write_gp0_slice(&mut self, words: &[u32]) -> Option<u32> {
        for (i, &word) in words.iter().enumerate() {
            let store_pending = self
                .vram_transfer
                .as_ref()
                .is_some_and(|t| t.direction == TransferDirection::VramToCpu);
            if store_pending {
                log::debug!(
                    "GP0 word 0x{:08X} during VRAM store handed back to control channel",
                    word
                );
                let dropped = words.len() - i - 1;
                if dropped > 0 {
                    log::warn!(
                        "{} GP0 words after a VRAM store setup dropped; only one word is re-presented",
                        dropped
                    );
                }
                return Some(word);
            }
            self.write_gp0(word);
        }
        None
    }

    /// Dispatch a complete GP0 command buffer
    fn execute_gp0(&mut self, id: u8, words: &[u32]) {
        let entry = self.table.entry(id);

        // The frame-skip flag is sampled exactly once per dispatch so a
        // command is never partially skipped and partially rendered.
        if self.frame_skip && entry.skippable {
            log::trace!("GP0({:02X}): skipped, {} words consumed", id, words.len());
        } else {
            (entry.handler)(self, words);
        }

        if let Some(ticks) = self.busy_hack {
            self.busy_ticks = ticks;
        }
    }

    /// Read the packed GPUSTAT register
    ///
    /// Applies the artificial-busy countdown (the stored register keeps
    /// its idle bit; only the reported value shows busy) and toggles the
    /// drawing-odd-line bit while vertical interlace is enabled.
    pub fn read_status(&mut self) -> u32 {
        if self.status.contains(StatusFlags::VERTICAL_INTERLACE) {
            let odd = self.status.contains(StatusFlags::DRAWING_ODD_LINE);
            self.status.set(StatusFlags::DRAWING_ODD_LINE, !odd);
        }

        let mut value = self.status.read();
        if self.busy_ticks > 0 {
            self.busy_ticks -= 1;
            value &= !StatusFlags::READY_FOR_CMD.bits();
        }
        value
    }

    /// Read the GPUREAD response register
    ///
    /// Returns store payload words while a VRAM→CPU transfer is active,
    /// otherwise the value latched by the last GPU-info request.
    pub fn read_response(&mut self) -> u32 {
        let storing = self
            .vram_transfer
            .as_ref()
            .is_some_and(|t| t.direction == TransferDirection::VramToCpu);
        if storing {
            self.read_transfer_word()
        } else {
            self.data_latch
        }
    }

    /// Process one GP1 (control channel) word
    ///
    /// Control commands execute immediately, one word each. Ids mirror
    /// modulo 0x40 and the masked 0x10-0x1F band selects GPU info; every
    /// write is latched for the freeze record.
    pub fn write_gp1(&mut self, word: u32) {
        let raw_id = (word >> 24) as u8;
        self.status_control[raw_id as usize] = word;
        self.apply_gp1(raw_id & 0x3F, word);
    }

    /// Dispatch a canonicalized GP1 command
    fn apply_gp1(&mut self, command: u8, word: u32) {
        match command {
            0x00 => self.gp1_reset(),
            0x01 => self.gp1_reset_command_buffer(),
            0x02 => self.gp1_acknowledge_interrupt(),
            0x03 => self.gp1_display_enable(word),
            0x04 => self.gp1_dma_direction(word),
            0x05 => self.gp1_display_area_start(word),
            0x06 => self.gp1_horizontal_display_range(word),
            0x07 => self.gp1_vertical_display_range(word),
            0x08 => self.gp1_display_mode(word),
            0x09 => self.gp1_texture_disable(word),
            0x10..=0x1F => self.gp1_gpu_info(word),
            _ => {
                log::warn!("Unknown GP1 command: 0x{:02X}", command);
            }
        }
    }

    /// Capture a freeze record of all persistent GPU state
    pub fn freeze(&self) -> FreezeData {
        FreezeData {
            version: FREEZE_VERSION,
            status: self.status.read(),
            control: self.status_control,
            vram: self.vram.as_bytes(),
        }
    }

    /// Restore state from a freeze record
    ///
    /// Replays the latched display control words to rebuild derived
    /// display state, then overwrites the status register whole and
    /// re-derives the drawing mode and mask policy from its bits. The
    /// legacy record does not carry the texture window, drawing area, or
    /// drawing offset; those keep their reset values until the stream
    /// sets them again.
    pub fn unfreeze(&mut self, data: &FreezeData) {
        self.reset_state_preserving_vram();
        self.vram.load_bytes(&data.vram);
        self.status_control = data.control;

        // Display state first: these clobber status bits that the frozen
        // register value then overrides wholesale.
        for id in 0x03..=0x08u8 {
            self.apply_gp1(id, self.status_control[id as usize]);
        }

        self.status.write(data.status);

        // Re-derive the attribute context the register encodes
        self.apply_texpage(TexturePage::from_bits((data.status & 0x1FF) as u16));
        self.draw_mode.dithering = self.status.dithering();
        self.draw_mode.draw_to_display = self.status.draw_to_display();
        self.draw_mode.texture_disable = self.status.texture_disable();
        self.mask.set_mask_bit = self.status.set_mask_bit();
        self.mask.check_mask_bit = self.status.check_mask_bit();
    }
}

impl Default for GPU {
    fn default() -> Self {
        Self::new()
    }
}
