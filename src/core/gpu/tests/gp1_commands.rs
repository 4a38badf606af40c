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

//! GP1 control command tests
//! Display control, DMA direction, id mirroring, and GPU info readback

use super::super::*;

#[test]
fn test_display_enable() {
    let mut gpu = GPU::new();
    assert!(gpu.status.display_disabled());

    gpu.write_gp1(0x0300_0000); // Bit 0 clear: display on
    assert!(!gpu.status.display_disabled());

    gpu.write_gp1(0x0300_0001);
    assert!(gpu.status.display_disabled());
}

#[test]
fn test_display_area_start() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0500_0000 | 320 | (128 << 10));
    assert_eq!(gpu.display_area.x, 320);
    assert_eq!(gpu.display_area.y, 128);
}

#[test]
fn test_display_ranges() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0600_0000 | 0x220 | (0xC00 << 12));
    assert_eq!(gpu.display_area.h_range, (0x220, 0xC00));

    gpu.write_gp1(0x0700_0000 | 0x20 | (0x100 << 10));
    assert_eq!(gpu.display_area.v_range, (0x20, 0x100));
}

#[test]
fn test_display_mode_resolutions() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0800_0001); // hr1 = 1
    assert_eq!(gpu.status.display_width(), 320);

    gpu.write_gp1(0x0800_0003); // hr1 = 3
    assert_eq!(gpu.status.display_width(), 640);

    gpu.write_gp1(0x0800_0040); // 368-pixel mode overrides hr1
    assert_eq!(gpu.status.display_width(), 368);

    // PAL doubles the line count names
    gpu.write_gp1(0x0800_0008);
    assert_eq!(gpu.status.display_height(), 256);
    gpu.write_gp1(0x0800_002C); // PAL + 480-line interlace
    assert_eq!(gpu.status.display_height(), 512);
}

#[test]
fn test_dma_direction() {
    let mut gpu = GPU::new();
    assert_eq!(gpu.status.dma_direction(), DmaDirection::Off);

    gpu.write_gp1(0x0400_0002);
    assert_eq!(gpu.status.dma_direction(), DmaDirection::CpuToGpu);
    assert_eq!((gpu.status.read() >> 29) & 3, 2);

    gpu.write_gp1(0x0400_0003);
    assert_eq!(gpu.status.dma_direction(), DmaDirection::GpuToCpu);
}

#[test]
fn test_texture_disable_toggle() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0900_0001);
    assert!(gpu.status.texture_disable());
    gpu.write_gp1(0x0900_0000);
    assert!(!gpu.status.texture_disable());
}

#[test]
fn test_command_id_mirroring() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0300_0000); // Display on
    assert!(!gpu.status.display_disabled());

    // 0x40 mirrors onto 0x00: full state reset, display off again
    gpu.write_gp1(0x4000_0000);
    assert!(gpu.status.display_disabled());

    // 0x43 mirrors onto 0x03
    gpu.write_gp1(0x4300_0000);
    assert!(!gpu.status.display_disabled());
}

#[test]
fn test_control_writes_latched_at_raw_id() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0500_0123);
    gpu.write_gp1(0x4500_0456);

    assert_eq!(gpu.status_control[0x05], 0x0500_0123);
    assert_eq!(gpu.status_control[0x45], 0x4500_0456);
}

#[test]
fn test_reset_command_buffer_discards_partial() {
    let mut gpu = GPU::new();

    gpu.write_gp0(0x2000_00FF);
    gpu.write_gp0(0x0010_0010);
    assert!(gpu.assembler.is_accumulating());

    gpu.write_gp1(0x0100_0000);
    assert!(!gpu.assembler.is_accumulating());

    // The stream realigns on the next command word
    let tri = [0x2000_00FF, 0x0000_0000, 0x0010_0010, 0x0020_0020];
    assert!(gpu.write_gp0_slice(&tri).is_none());
    assert_eq!(gpu.drain_primitives().len(), 1);
}

#[test]
fn test_reset_command_buffer_aborts_transfer() {
    let mut gpu = GPU::new();

    let header = [0xA000_0000, 0x0000_0000, 0x0002_0002];
    assert!(gpu.write_gp0_slice(&header).is_none());
    assert!(gpu.vram_transfer.is_some());

    gpu.write_gp1(0x0100_0000);
    assert!(gpu.vram_transfer.is_none());

    // What would have been payload is now an ordinary command word
    gpu.write_gp0(0xE500_0000 | 42);
    assert_eq!(gpu.draw_offset, (42, 0));
}

#[test]
fn test_gpu_info_readback() {
    let mut gpu = GPU::new();

    gpu.write_gp0(0xE300_0000 | 16 | (32 << 10));
    gpu.write_gp1(0x1000_0003);
    assert_eq!(gpu.read_response(), 16 | (32 << 10));

    gpu.write_gp0(0xE500_0000 | 0x7FF); // Offset (-1, 0)
    gpu.write_gp1(0x1000_0005);
    assert_eq!(gpu.read_response(), 0x7FF);

    gpu.write_gp1(0x1000_0007);
    assert_eq!(gpu.read_response(), 2);
}

#[test]
fn test_gpu_info_unknown_subtype_keeps_latch() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x1000_0007);
    assert_eq!(gpu.read_response(), 2);

    // Unlisted subtype: the old value stays readable
    gpu.write_gp1(0x1000_0000);
    assert_eq!(gpu.read_response(), 2);
}

#[test]
fn test_gpu_info_band_mirrors() {
    let mut gpu = GPU::new();

    // Any masked id in 0x10-0x1F selects GPU info
    gpu.write_gp1(0x1F00_0007);
    assert_eq!(gpu.read_response(), 2);
    gpu.write_gp1(0x5700_0007); // 0x57 & 0x3F = 0x17
    assert_eq!(gpu.read_response(), 2);
}

#[test]
fn test_gp1_reset_defaults() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0800_0003); // 640-wide
    gpu.write_gp1(0x0400_0002);
    gpu.write_gp0(0xE600_0003);

    gpu.write_gp1(0x0000_0000);

    assert_eq!(gpu.status.display_width(), 256);
    assert_eq!(gpu.status.dma_direction(), DmaDirection::Off);
    assert!(!gpu.status.set_mask_bit());
    assert!(gpu.status.display_disabled());
    assert!(gpu.status.is_idle());
}
