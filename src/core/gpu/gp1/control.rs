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

//! GP1 control commands
//!
//! Reset, command-state clear, interrupt acknowledge, DMA direction,
//! the GPU-info readback, and the legacy texture-disable toggle.

use super::super::status::StatusFlags;
use super::super::GPU;

impl GPU {
    /// GP1(0x00): Reset GPU
    ///
    /// Reinitializes the attribute context and status register and
    /// re-issues the default display mode. VRAM contents are preserved,
    /// matching the hardware reset.
    pub(in crate::core::gpu) fn gp1_reset(&mut self) {
        self.reset_state_preserving_vram();

        // Default display mode: 320×240 NTSC 15-bit, display disabled
        self.gp1_display_mode(0);
        self.gp1_display_enable(1);

        log::debug!("GP1(00): GPU reset");
    }

    /// GP1(0x01): Reset Command Buffer
    ///
    /// Drops any partially accumulated rendering-channel command and
    /// cancels an in-flight image transfer.
    pub(in crate::core::gpu) fn gp1_reset_command_buffer(&mut self) {
        self.assembler.reset();
        self.vram_transfer = None;

        log::debug!("GP1(01): command state cleared");
    }

    /// GP1(0x02): Acknowledge GPU Interrupt
    ///
    /// Clears the IRQ1 flag raised by GP0(0x1F).
    pub(in crate::core::gpu) fn gp1_acknowledge_interrupt(&mut self) {
        self.status.acknowledge_interrupt();
        log::debug!("GP1(02): IRQ1 acknowledged");
    }

    /// GP1(0x04): DMA Direction
    ///
    /// Bits 0-1 select the direction: 0=off, 1=FIFO query, 2=CPU→GPU,
    /// 3=GPU→CPU. The value lands in status bits 29-30.
    pub(in crate::core::gpu) fn gp1_dma_direction(&mut self, value: u32) {
        self.status.set_field(29, 2, value & 3);
        log::debug!("GP1(04): DMA direction {}", value & 3);
    }

    /// GP1(0x09): Texture Disable
    ///
    /// Legacy toggle allowing GP0(E1) bit 11 to disable texturing.
    pub(in crate::core::gpu) fn gp1_texture_disable(&mut self, value: u32) {
        self.status.set(StatusFlags::TEXTURE_DISABLE, value & 1 != 0);
        log::debug!("GP1(09): texture disable {}", value & 1);
    }

    /// GP1(0x10-0x1F): GPU Info
    ///
    /// Latches a readback value for subsequent [`GPU::read_response`]
    /// calls. Subtypes:
    ///
    /// - 0x02: texture window setting
    /// - 0x03: drawing area top-left
    /// - 0x04: drawing area bottom-right
    /// - 0x05: drawing offset
    /// - 0x07: GPU version (2)
    ///
    /// Other subtypes leave the previous readback value in place, as the
    /// hardware does.
    pub(in crate::core::gpu) fn gp1_gpu_info(&mut self, value: u32) {
        let info = value & 0x0F;

        self.data_latch = match info {
            0x02 => {
                (self.texture_window.mask_x as u32)
                    | (self.texture_window.mask_y as u32) << 5
                    | (self.texture_window.offset_x as u32) << 10
                    | (self.texture_window.offset_y as u32) << 15
            }
            0x03 => (self.draw_area.left as u32) | (self.draw_area.top as u32) << 10,
            0x04 => (self.draw_area.right as u32) | (self.draw_area.bottom as u32) << 10,
            0x05 => {
                let (x, y) = self.draw_offset;
                ((x as u32) & 0x7FF) | ((y as u32) & 0x7FF) << 11
            }
            0x07 => 2,
            _ => self.data_latch,
        };

        log::debug!("GP1(10): info type {} → 0x{:08X}", info, self.data_latch);
    }
}
