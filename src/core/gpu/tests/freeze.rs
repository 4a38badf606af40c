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

//! Save-state tests
//! Byte layout, round-trip restoration, and validation errors

use super::super::freeze::*;
use super::super::*;
use crate::core::error::GpuError;

#[test]
fn test_freeze_record_size() {
    let gpu = GPU::new();
    let bytes = gpu.freeze().to_bytes();

    // version + status + 256 control words + 1MB VRAM
    assert_eq!(FREEZE_SIZE, 4 + 4 + 1024 + vram::VRAM_BYTES);
    assert_eq!(bytes.len(), FREEZE_SIZE);
}

#[test]
fn test_freeze_byte_layout() {
    let mut gpu = GPU::new();
    gpu.write_vram(0, 0, 0xBEEF);

    let bytes = gpu.freeze().to_bytes();

    // Version word first, little-endian
    assert_eq!(&bytes[0..4], &FREEZE_VERSION.to_le_bytes());
    // Status second
    assert_eq!(&bytes[4..8], &0x1480_2000u32.to_le_bytes());
    // VRAM tail starts after the control array
    assert_eq!(bytes[8 + 1024], 0xEF);
    assert_eq!(bytes[8 + 1024 + 1], 0xBE);
}

#[test]
fn test_freeze_roundtrip() {
    let mut gpu = GPU::new();

    gpu.write_gp1(0x0300_0000); // Display on
    gpu.write_gp1(0x0800_0003); // 640-wide
    gpu.write_gp1(0x0500_0000 | 320); // Display origin
    gpu.write_gp0(0xE100_0000 | 0x92); // Texpage
    gpu.write_gp0(0xE600_0003); // Mask bits
    gpu.write_vram(123, 45, 0x6789);

    let record = gpu.freeze();
    let bytes = record.to_bytes();

    let mut restored = GPU::new();
    restored.unfreeze(&FreezeData::from_bytes(&bytes).unwrap());

    assert_eq!(restored.status.read(), gpu.status.read());
    assert_eq!(restored.read_vram(123, 45), 0x6789);
    assert_eq!(restored.display_area.x, 320);
    assert_eq!(restored.status.display_width(), 640);
    assert!(!restored.status.display_disabled());

    // Attribute context re-derived from the status bits
    assert_eq!(restored.draw_mode.texture_page_x, 128);
    assert_eq!(restored.draw_mode.texture_page_y, 256);
    assert!(restored.mask.set_mask_bit);
    assert!(restored.mask.check_mask_bit);

    // A second freeze of the restored GPU is byte-identical
    assert_eq!(restored.freeze().to_bytes(), bytes);
}

#[test]
fn test_unfreeze_discards_transient_state() {
    let mut gpu = GPU::new();
    let record = GPU::new().freeze();

    // Mid-command and mid-transfer state must not survive a restore
    gpu.write_gp0(0x2000_00FF);
    gpu.write_gp0(0x0010_0010);
    gpu.unfreeze(&record);

    assert!(!gpu.assembler.is_accumulating());
    assert!(gpu.vram_transfer.is_none());
}

#[test]
fn test_from_bytes_rejects_short_input() {
    let err = FreezeData::from_bytes(&[0u8; 16]).unwrap_err();
    match err {
        GpuError::FreezeSizeMismatch { expected, got } => {
            assert_eq!(expected, FREEZE_SIZE);
            assert_eq!(got, 16);
        }
        other => panic!("expected size mismatch, got {other}"),
    }
}

#[test]
fn test_from_bytes_rejects_wrong_version() {
    let mut bytes = GPU::new().freeze().to_bytes();
    bytes[0] = 99;

    let err = FreezeData::from_bytes(&bytes).unwrap_err();
    match err {
        GpuError::FreezeVersionMismatch { expected, got } => {
            assert_eq!(expected, FREEZE_VERSION);
            assert_eq!(got, 99);
        }
        other => panic!("expected version mismatch, got {other}"),
    }
}
