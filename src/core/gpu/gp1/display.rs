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

//! GP1 display configuration commands
//!
//! Display enable, display-area origin and ranges, and the display mode
//! (resolution, video standard, color depth, interlace). These only touch
//! status-register fields and the display area; the displayed width and
//! height are derived from the status register by lookup.

use super::super::status::StatusFlags;
use super::super::GPU;

impl GPU {
    /// GP1(0x03): Display Enable
    ///
    /// Bit 0 uses inverted logic: 0 enables the display, 1 disables it.
    pub(in crate::core::gpu) fn gp1_display_enable(&mut self, value: u32) {
        let disabled = value & 1 != 0;
        self.status.set(StatusFlags::DISPLAY_DISABLED, disabled);

        log::debug!(
            "GP1(03): display {}",
            if disabled { "disabled" } else { "enabled" }
        );
    }

    /// GP1(0x05): Start of Display Area
    ///
    /// X bits 0-9, Y bits 10-18: the VRAM origin scanned out to the
    /// display.
    pub(in crate::core::gpu) fn gp1_display_area_start(&mut self, value: u32) {
        self.display_area.x = (value & 0x3FF) as u16;
        self.display_area.y = ((value >> 10) & 0x1FF) as u16;

        log::debug!(
            "GP1(05): display origin ({}, {})",
            self.display_area.x,
            self.display_area.y
        );
    }

    /// GP1(0x06): Horizontal Display Range
    ///
    /// X1 bits 0-11, X2 bits 12-23, in GPU clock units.
    pub(in crate::core::gpu) fn gp1_horizontal_display_range(&mut self, value: u32) {
        let x1 = (value & 0xFFF) as u16;
        let x2 = ((value >> 12) & 0xFFF) as u16;
        self.display_area.h_range = (x1, x2);

        log::debug!("GP1(06): horizontal range {} to {}", x1, x2);
    }

    /// GP1(0x07): Vertical Display Range
    ///
    /// Y1 bits 0-9, Y2 bits 10-19, in scanlines.
    pub(in crate::core::gpu) fn gp1_vertical_display_range(&mut self, value: u32) {
        let y1 = (value & 0x3FF) as u16;
        let y2 = ((value >> 10) & 0x3FF) as u16;
        self.display_area.v_range = (y1, y2);

        log::debug!("GP1(07): vertical range {} to {}", y1, y2);
    }

    /// GP1(0x08): Display Mode
    ///
    /// ```text
    /// Bit 0-1: Horizontal resolution 1    → status bits 17-18
    /// Bit 2:   Vertical resolution        → status bit 19
    /// Bit 3:   Video mode (0=NTSC, 1=PAL) → status bit 20
    /// Bit 4:   Color depth (0=15b, 1=24b) → status bit 21
    /// Bit 5:   Vertical interlace         → status bit 22
    /// Bit 6:   Horizontal resolution 2    → status bit 16
    /// Bit 7:   Reverse flag               → status bit 14
    /// ```
    pub(in crate::core::gpu) fn gp1_display_mode(&mut self, value: u32) {
        self.status.set_field(17, 2, value & 3);
        self.status.set(StatusFlags::VERTICAL_RES, value & (1 << 2) != 0);
        self.status
            .set(StatusFlags::VIDEO_MODE_PAL, value & (1 << 3) != 0);
        self.status
            .set(StatusFlags::COLOR_DEPTH_24BIT, value & (1 << 4) != 0);
        self.status
            .set(StatusFlags::VERTICAL_INTERLACE, value & (1 << 5) != 0);
        self.status.set_field(16, 1, (value >> 6) & 1);
        self.status
            .set(StatusFlags::REVERSE_FLAG, value & (1 << 7) != 0);

        log::debug!(
            "GP1(08): display mode {}×{} {}",
            self.status.display_width(),
            self.status.display_height(),
            if self.status.contains(StatusFlags::VIDEO_MODE_PAL) {
                "PAL"
            } else {
                "NTSC"
            }
        );
    }
}
