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

//! Command word field extraction tests

use super::super::fields::*;

#[test]
fn test_color_channels() {
    let c = Color::from_word(0x00FF8040);
    assert_eq!(c.r, 0x40);
    assert_eq!(c.g, 0x80);
    assert_eq!(c.b, 0xFF);
}

#[test]
fn test_color_to_rgb15_truncates() {
    let c = Color {
        r: 0xFF,
        g: 0x07,
        b: 0x08,
    };
    let rgb15 = c.to_rgb15();
    assert_eq!(rgb15 & 0x1F, 31);
    assert_eq!((rgb15 >> 5) & 0x1F, 0); // 7 >> 3 truncates to 0
    assert_eq!((rgb15 >> 10) & 0x1F, 1);
    assert_eq!(rgb15 & 0x8000, 0); // Mask bit clear
}

#[test]
fn test_vertex_sign_extension() {
    // Positive in-range
    let v = Vertex::from_word(0x0064_0032);
    assert_eq!(v.x, 50);
    assert_eq!(v.y, 100);

    // 0x7FF is -1 in 11-bit two's complement
    let v = Vertex::from_word(0x07FF_07FF);
    assert_eq!(v.x, -1);
    assert_eq!(v.y, -1);

    // 0x400 is the most negative value
    let v = Vertex::from_word(0x0400_0400);
    assert_eq!(v.x, -1024);
    assert_eq!(v.y, -1024);

    // Bits 11-15 of each halfword are ignored
    let v = Vertex::from_word(0xF832_F832);
    assert_eq!(v.x, 50);
    assert_eq!(v.y, 50);
}

#[test]
fn test_polyline_terminator_pattern() {
    assert!(is_polyline_terminator(0x5555_5555));
    assert!(is_polyline_terminator(0x5000_5000));
    assert!(is_polyline_terminator(0x5FFF_5FFF));
    assert!(!is_polyline_terminator(0x5000_0000));
    assert!(!is_polyline_terminator(0x0000_5000));
    assert!(!is_polyline_terminator(0x4555_5555));
}

#[test]
fn test_clut_base() {
    // X in steps of 16 texels, Y in rows
    let (x, y) = clut_base(0x7FFF_0000);
    assert_eq!(x, 63 * 16);
    assert_eq!(y, 511);

    let (x, y) = clut_base(0x0040_0000);
    assert_eq!(x, 0);
    assert_eq!(y, 1);
}

#[test]
fn test_texture_page_from_bits() {
    let page = TexturePage::from_bits(0x1FF);
    assert_eq!(page.x_base, 15 * 64);
    assert_eq!(page.y_base, 256);
    assert_eq!(page.semi_transparency, 3);
    assert_eq!(page.depth, TextureDepth::T15Bit);

    let page = TexturePage::from_bits(0);
    assert_eq!(page.x_base, 0);
    assert_eq!(page.y_base, 0);
    assert_eq!(page.depth, TextureDepth::T4Bit);
}

#[test]
fn test_transfer_size_zero_means_max() {
    assert_eq!(transfer_size(0x0000_0000), (1024, 512));
    assert_eq!(transfer_size(0x0001_0001), (1, 1));
    assert_eq!(transfer_size(0x0200_0400), (1024, 512));

    // Excess bits wrap through the same normalization
    assert_eq!(transfer_size(0x0201_0401), (1, 1));
}

#[test]
fn test_vram_coords_masking() {
    assert_eq!(vram_coords(0x01FF_03FF), (1023, 511));
    assert_eq!(vram_coords(0x0200_0400), (0, 0));
}
