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

//! GP0 image transfer commands
//!
//! Move (0x80, VRAM→VRAM), load (0xA0, stream→VRAM), and store (0xC0,
//! VRAM→stream). Only the 3-4 word header travels through the command
//! buffer; after a load dispatch the controller switches into
//! transfer-passthrough and routes subsequent GP0 words directly into
//! VRAM, and after a store dispatch the payload is read back through
//! [`GPU::read_response`].

use super::super::primitives::TransferView;
use super::super::registers::{TransferDirection, VramTransfer};
use super::super::status::StatusFlags;
use super::super::GPU;

impl GPU {
    /// GP0(0x80): VRAM→VRAM move
    ///
    /// 4-word header: command, source XY, destination XY, extent. Zero
    /// extent fields mean the maximum (1024/512); the copy respects the
    /// current mask policy and wraps at the VRAM edges.
    pub(in crate::core::gpu) fn cmd_vram_move(&mut self, words: &[u32]) {
        let view = TransferView::new(words);
        let (src_x, src_y) = view.source();
        let (dst_x, dst_y) = view.destination();
        let (width, height) = view.size();

        log::debug!(
            "GP0(80): move ({}, {}) → ({}, {}) {}×{}",
            src_x,
            src_y,
            dst_x,
            dst_y,
            width,
            height
        );

        self.vram
            .copy_rect(src_x, src_y, dst_x, dst_y, width, height, self.mask);
    }

    /// GP0(0xA0): Stream→VRAM load
    ///
    /// 3-word header: command, destination XY, extent. Dispatching the
    /// header arms transfer-passthrough for exactly `ceil(w*h / 2)`
    /// payload words (two texels per word).
    pub(in crate::core::gpu) fn cmd_vram_load(&mut self, words: &[u32]) {
        let view = TransferView::new(words);
        let (x, y) = view.source();
        let (width, height) = view.size();

        log::debug!("GP0(A0): load ({}, {}) {}×{}", x, y, width, height);

        self.vram_transfer = Some(VramTransfer {
            x,
            y,
            width,
            height,
            current_x: 0,
            current_y: 0,
            direction: TransferDirection::CpuToVram,
        });
    }

    /// GP0(0xC0): VRAM→stream store
    ///
    /// 3-word header: command, source XY, extent. The payload is produced
    /// by subsequent [`GPU::read_response`] calls, two texels per word.
    pub(in crate::core::gpu) fn cmd_vram_store(&mut self, words: &[u32]) {
        let view = TransferView::new(words);
        let (x, y) = view.source();
        let (width, height) = view.size();

        log::debug!("GP0(C0): store ({}, {}) {}×{}", x, y, width, height);

        self.vram_transfer = Some(VramTransfer {
            x,
            y,
            width,
            height,
            current_x: 0,
            current_y: 0,
            direction: TransferDirection::VramToCpu,
        });
        self.status.insert(StatusFlags::READY_SEND_VRAM);
    }

    /// Route one passthrough word of an active stream→VRAM load
    ///
    /// Each word carries two texels, written row-major with wraparound;
    /// writes honor the mask policy. Leaves passthrough mode once the
    /// declared extent is filled.
    pub(in crate::core::gpu) fn process_transfer_word(&mut self, word: u32) {
        let mut transfer = match self.vram_transfer.take() {
            Some(t) => t,
            None => return,
        };

        let lo = word as u16;
        let hi = (word >> 16) as u16;

        self.vram.write_masked(
            transfer.x.wrapping_add(transfer.current_x),
            transfer.y.wrapping_add(transfer.current_y),
            lo,
            self.mask,
        );

        if transfer.advance() {
            self.vram.write_masked(
                transfer.x.wrapping_add(transfer.current_x),
                transfer.y.wrapping_add(transfer.current_y),
                hi,
                self.mask,
            );
            transfer.advance();
        }

        if transfer.is_complete() {
            log::debug!("Stream→VRAM load complete");
        } else {
            self.vram_transfer = Some(transfer);
        }
    }

    /// Produce one readback word of an active VRAM→stream store
    ///
    /// Two texels per word, zero-padded at the tail of an odd-sized
    /// rectangle. Clears the ready-to-send flag when the rectangle is
    /// exhausted.
    pub(in crate::core::gpu) fn read_transfer_word(&mut self) -> u32 {
        let mut transfer = match self.vram_transfer.take() {
            Some(t) => t,
            None => return 0,
        };

        let lo = self.vram.read(
            transfer.x.wrapping_add(transfer.current_x),
            transfer.y.wrapping_add(transfer.current_y),
        );

        let hi = if transfer.advance() {
            let texel = self.vram.read(
                transfer.x.wrapping_add(transfer.current_x),
                transfer.y.wrapping_add(transfer.current_y),
            );
            transfer.advance();
            texel
        } else {
            0
        };

        if transfer.is_complete() {
            self.status.remove(StatusFlags::READY_SEND_VRAM);
            log::debug!("VRAM→stream store complete");
        } else {
            self.vram_transfer = Some(transfer);
        }

        (lo as u32) | ((hi as u32) << 16)
    }
}
