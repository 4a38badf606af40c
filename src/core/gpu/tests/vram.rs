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

//! VRAM tests
//! Wraparound, fill/copy semantics, and mask-bit policy

use super::super::registers::MaskSettings;
use super::super::vram::*;

#[test]
fn test_wraparound_read_write() {
    let mut vram = Vram::new();

    vram.write(100, 100, 0x1234);
    assert_eq!(vram.read(100, 100), 0x1234);

    // Out-of-range coordinates alias back in
    assert_eq!(vram.read(100 + 1024, 100), 0x1234);
    assert_eq!(vram.read(100, 100 + 512), 0x1234);
    vram.write(1024 + 5, 512 + 6, 0xABCD);
    assert_eq!(vram.read(5, 6), 0xABCD);
}

#[test]
fn test_fill_rect_rounds_width_to_16() {
    let mut vram = Vram::new();

    // Width 17 rounds up to 32
    vram.fill_rect(0, 0, 17, 1, 0x001F);
    assert_eq!(vram.read(16, 0), 0x001F);
    assert_eq!(vram.read(31, 0), 0x001F);
    assert_eq!(vram.read(32, 0), 0x0000);
}

#[test]
fn test_fill_rect_zero_means_max() {
    let mut vram = Vram::new();

    vram.fill_rect(0, 0, 0, 0, 0x7C00);
    assert_eq!(vram.read(0, 0), 0x7C00);
    assert_eq!(vram.read(1023, 511), 0x7C00);
}

#[test]
fn test_fill_rect_ignores_mask() {
    let mut vram = Vram::new();

    // Pre-set a masked texel; fill overwrites it anyway
    vram.write(8, 0, 0x8000);
    vram.fill_rect(0, 0, 16, 1, 0x001F);
    assert_eq!(vram.read(8, 0), 0x001F);
}

#[test]
fn test_fill_rect_wraps_at_edge() {
    let mut vram = Vram::new();

    vram.fill_rect(1016, 510, 16, 4, 0x03E0);
    assert_eq!(vram.read(1023, 511), 0x03E0);
    // Past the right edge lands on the left edge
    assert_eq!(vram.read(0, 510), 0x03E0);
    // Past the bottom edge lands on the top row
    assert_eq!(vram.read(1016, 0), 0x03E0);
    assert_eq!(vram.read(7, 1), 0x03E0);
    assert_eq!(vram.read(8, 1), 0x0000);
}

#[test]
fn test_write_masked_checks_destination() {
    let mut vram = Vram::new();
    let check = MaskSettings {
        set_mask_bit: false,
        check_mask_bit: true,
    };

    vram.write(10, 10, 0x8123);
    vram.write_masked(10, 10, 0x7FFF, check);
    assert_eq!(vram.read(10, 10), 0x8123); // Protected

    vram.write(11, 10, 0x0123);
    vram.write_masked(11, 10, 0x7FFF, check);
    assert_eq!(vram.read(11, 10), 0x7FFF); // Unprotected
}

#[test]
fn test_write_masked_sets_bit() {
    let mut vram = Vram::new();
    let set = MaskSettings {
        set_mask_bit: true,
        check_mask_bit: false,
    };

    vram.write_masked(20, 20, 0x1234, set);
    assert_eq!(vram.read(20, 20), 0x9234);
}

#[test]
fn test_copy_rect_overlapping() {
    let mut vram = Vram::new();

    // A 4-texel gradient, then copy one texel to the right over itself
    for i in 0..4u16 {
        vram.write(i, 0, i + 1);
    }
    vram.copy_rect(0, 0, 1, 0, 4, 1, MaskSettings::default());

    // Snapshot semantics: the source is read before any write lands
    assert_eq!(vram.read(1, 0), 1);
    assert_eq!(vram.read(2, 0), 2);
    assert_eq!(vram.read(3, 0), 3);
    assert_eq!(vram.read(4, 0), 4);
}

#[test]
fn test_copy_rect_zero_size_means_max() {
    let mut vram = Vram::new();

    vram.write(0, 0, 0x4242);
    // Width 0 normalizes to 1024, height 0 to 512: whole-VRAM copy onto
    // itself is an identity
    vram.copy_rect(0, 0, 0, 0, 0, 0, MaskSettings::default());
    assert_eq!(vram.read(0, 0), 0x4242);
}

#[test]
fn test_copy_rect_respects_mask() {
    let mut vram = Vram::new();
    let check = MaskSettings {
        set_mask_bit: false,
        check_mask_bit: true,
    };

    vram.write(0, 0, 0x1111);
    vram.write(100, 0, 0x8FFF); // Masked destination
    vram.copy_rect(0, 0, 100, 0, 1, 1, check);
    assert_eq!(vram.read(100, 0), 0x8FFF);
}

#[test]
fn test_rect_bulk_roundtrip() {
    let mut vram = Vram::new();
    let data = [1u16, 2, 3, 4, 5, 6];

    vram.write_rect(50, 60, 3, 2, &data, MaskSettings::default());
    assert_eq!(vram.read_rect(50, 60, 3, 2), data);
}

#[test]
fn test_byte_serialization_is_little_endian() {
    let mut vram = Vram::new();
    vram.write(0, 0, 0xABCD);

    let bytes = vram.as_bytes();
    assert_eq!(bytes.len(), VRAM_BYTES);
    assert_eq!(bytes[0], 0xCD);
    assert_eq!(bytes[1], 0xAB);

    let mut restored = Vram::new();
    restored.load_bytes(&bytes);
    assert_eq!(restored.read(0, 0), 0xABCD);
}
