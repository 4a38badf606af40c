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

//! GPUSTAT register
//!
//! The GPU exposes a single packed 32-bit status register (GPUSTAT,
//! readable at 0x1F801814). All named fields are pure derivations from that
//! value; the register is mutated only by the display controller as a side
//! effect of GP0/GP1 commands, never through ad-hoc field setters. The two
//! exceptions the hardware itself exposes are the whole-register overwrite
//! (save-state restore) and the IRQ1 acknowledge.
//!
//! # Bit layout
//!
//! ```text
//! Bit 0-3:   Texture page X base (N×64)
//! Bit 4:     Texture page Y base (0=0, 1=256)
//! Bit 5-6:   Semi-transparency mode
//! Bit 7-8:   Texture page color depth (0=4bit, 1=8bit, 2=15bit)
//! Bit 9:     Dithering enabled
//! Bit 10:    Drawing to display area allowed
//! Bit 11:    Set mask bit while drawing
//! Bit 12:    Check mask bit before drawing
//! Bit 13:    Interlace field
//! Bit 14:    Reverse flag
//! Bit 15:    Texture disable
//! Bit 16:    Horizontal resolution 2 (368-mode bit)
//! Bit 17-18: Horizontal resolution 1
//! Bit 19:    Vertical resolution (0=240, 1=480)
//! Bit 20:    Video mode (0=NTSC, 1=PAL)
//! Bit 21:    Display area color depth (0=15bit, 1=24bit)
//! Bit 22:    Vertical interlace enabled
//! Bit 23:    Display disabled
//! Bit 24:    Interrupt request (IRQ1)
//! Bit 25:    DMA request
//! Bit 26:    Ready to receive command (GPU idle)
//! Bit 27:    Ready to send VRAM to CPU
//! Bit 28:    Ready to receive DMA block
//! Bit 29-30: DMA direction
//! Bit 31:    Drawing odd lines in interlaced mode
//! ```

use bitflags::bitflags;

bitflags! {
    /// Single-bit GPUSTAT fields as named masks
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u32 {
        const DITHERING          = 1 << 9;
        const DRAW_TO_DISPLAY    = 1 << 10;
        const SET_MASK_BIT       = 1 << 11;
        const CHECK_MASK_BIT     = 1 << 12;
        const INTERLACE_FIELD    = 1 << 13;
        const REVERSE_FLAG       = 1 << 14;
        const TEXTURE_DISABLE    = 1 << 15;
        const VERTICAL_RES       = 1 << 19;
        const VIDEO_MODE_PAL     = 1 << 20;
        const COLOR_DEPTH_24BIT  = 1 << 21;
        const VERTICAL_INTERLACE = 1 << 22;
        const DISPLAY_DISABLED   = 1 << 23;
        const INTERRUPT_REQUEST  = 1 << 24;
        const DMA_REQUEST        = 1 << 25;
        const READY_FOR_CMD      = 1 << 26;
        const READY_SEND_VRAM    = 1 << 27;
        const READY_FOR_DMA      = 1 << 28;
        const DRAWING_ODD_LINE   = 1 << 31;
    }
}

/// DMA transfer direction selected through GP1(0x04)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmaDirection {
    /// DMA off
    Off,
    /// FIFO state query
    Fifo,
    /// CPU to GP0 block transfer
    CpuToGpu,
    /// GPUREAD to CPU block transfer
    GpuToCpu,
}

/// Display widths in pixels, keyed by `hr2 << 2 | hr1`
const DISPLAY_WIDTHS: [u16; 8] = [256, 320, 512, 640, 368, 384, 512, 640];

/// The packed GPUSTAT register
///
/// # Examples
///
/// ```
/// use psgpu::core::gpu::StatusRegister;
///
/// let reg = StatusRegister::new();
/// assert_eq!(reg.read(), 0x1480_2000); // hardware reset value
/// assert!(reg.is_idle());
/// assert!(reg.display_disabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRegister {
    bits: u32,
}

impl StatusRegister {
    /// Hardware reset value: ready-for-DMA, GPU idle, display disabled,
    /// interlace field all set; everything else clear.
    pub const RESET_VALUE: u32 = StatusFlags::READY_FOR_DMA.bits()
        | StatusFlags::READY_FOR_CMD.bits()
        | StatusFlags::DISPLAY_DISABLED.bits()
        | StatusFlags::INTERLACE_FIELD.bits();

    /// Create a register holding the reset value
    pub fn new() -> Self {
        Self {
            bits: Self::RESET_VALUE,
        }
    }

    /// Restore the documented reset value
    pub fn reset(&mut self) {
        self.bits = Self::RESET_VALUE;
    }

    /// Whole-register read
    #[inline(always)]
    pub fn read(&self) -> u32 {
        self.bits
    }

    /// Whole-register overwrite (save-state restore)
    #[inline(always)]
    pub fn write(&mut self, value: u32) {
        self.bits = value;
    }

    /// Test a single-bit field
    #[inline(always)]
    pub fn contains(&self, flags: StatusFlags) -> bool {
        self.bits & flags.bits() != 0
    }

    pub(in crate::core::gpu) fn insert(&mut self, flags: StatusFlags) {
        self.bits |= flags.bits();
    }

    pub(in crate::core::gpu) fn remove(&mut self, flags: StatusFlags) {
        self.bits &= !flags.bits();
    }

    pub(in crate::core::gpu) fn set(&mut self, flags: StatusFlags, value: bool) {
        if value {
            self.insert(flags);
        } else {
            self.remove(flags);
        }
    }

    /// Replace a multi-bit field: `value` is masked to `width` bits and
    /// shifted into position `shift`.
    pub(in crate::core::gpu) fn set_field(&mut self, shift: u32, width: u32, value: u32) {
        let mask = ((1 << width) - 1) << shift;
        self.bits = (self.bits & !mask) | ((value << shift) & mask);
    }

    /// Texture page X base in texels (bits 0-3, steps of 64)
    pub fn texture_page_x(&self) -> u16 {
        ((self.bits & 0x0F) * 64) as u16
    }

    /// Texture page Y base in texels (bit 4, 0 or 256)
    pub fn texture_page_y(&self) -> u16 {
        (((self.bits >> 4) & 1) * 256) as u16
    }

    /// Semi-transparency mode (bits 5-6)
    pub fn semi_transparency(&self) -> u8 {
        ((self.bits >> 5) & 3) as u8
    }

    /// Texture page color depth (bits 7-8)
    pub fn texture_depth(&self) -> u8 {
        ((self.bits >> 7) & 3) as u8
    }

    /// Dithering enabled (bit 9)
    pub fn dithering(&self) -> bool {
        self.contains(StatusFlags::DITHERING)
    }

    /// Drawing to the display area allowed (bit 10)
    pub fn draw_to_display(&self) -> bool {
        self.contains(StatusFlags::DRAW_TO_DISPLAY)
    }

    /// Mask bit is set on drawn texels (bit 11)
    pub fn set_mask_bit(&self) -> bool {
        self.contains(StatusFlags::SET_MASK_BIT)
    }

    /// Masked texels are write-protected (bit 12)
    pub fn check_mask_bit(&self) -> bool {
        self.contains(StatusFlags::CHECK_MASK_BIT)
    }

    /// Legacy texture disable (bit 15)
    pub fn texture_disable(&self) -> bool {
        self.contains(StatusFlags::TEXTURE_DISABLE)
    }

    /// Display disabled (bit 23)
    pub fn display_disabled(&self) -> bool {
        self.contains(StatusFlags::DISPLAY_DISABLED)
    }

    /// IRQ1 pending (bit 24)
    pub fn interrupt_request(&self) -> bool {
        self.contains(StatusFlags::INTERRUPT_REQUEST)
    }

    /// Acknowledge IRQ1
    ///
    /// The only individually exposed field write besides the
    /// whole-register overwrite.
    pub fn acknowledge_interrupt(&mut self) {
        self.remove(StatusFlags::INTERRUPT_REQUEST);
    }

    /// GPU idle / ready to receive a command (bit 26)
    pub fn is_idle(&self) -> bool {
        self.contains(StatusFlags::READY_FOR_CMD)
    }

    /// Ready to send VRAM data to the CPU (bit 27)
    pub fn ready_to_send_vram(&self) -> bool {
        self.contains(StatusFlags::READY_SEND_VRAM)
    }

    /// Ready to receive a DMA block (bit 28)
    pub fn ready_for_dma(&self) -> bool {
        self.contains(StatusFlags::READY_FOR_DMA)
    }

    /// DMA direction (bits 29-30)
    pub fn dma_direction(&self) -> DmaDirection {
        match (self.bits >> 29) & 3 {
            0 => DmaDirection::Off,
            1 => DmaDirection::Fifo,
            2 => DmaDirection::CpuToGpu,
            _ => DmaDirection::GpuToCpu,
        }
    }

    /// Display width in pixels
    ///
    /// Derived from the split horizontal-resolution fields: bits 17-18
    /// form the low part of the index, bit 16 (the 368-mode bit) the high
    /// part.
    ///
    /// # Examples
    ///
    /// ```
    /// use psgpu::core::gpu::StatusRegister;
    ///
    /// let mut reg = StatusRegister::new();
    /// assert_eq!(reg.display_width(), 256);
    ///
    /// reg.write(reg.read() | (1 << 17)); // hr1 = 1
    /// assert_eq!(reg.display_width(), 320);
    /// ```
    pub fn display_width(&self) -> u16 {
        let hr1 = (self.bits >> 17) & 3;
        let hr2 = (self.bits >> 16) & 1;
        DISPLAY_WIDTHS[((hr2 << 2) | hr1) as usize]
    }

    /// Display height in pixels
    ///
    /// Derived from the interlace-height bit (19) and the video-standard
    /// bit (20): 240/480 lines for NTSC, 256/512 for PAL.
    pub fn display_height(&self) -> u16 {
        let double = self.contains(StatusFlags::VERTICAL_RES);
        match (self.contains(StatusFlags::VIDEO_MODE_PAL), double) {
            (false, false) => 240,
            (false, true) => 480,
            (true, false) => 256,
            (true, true) => 512,
        }
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::new()
    }
}
