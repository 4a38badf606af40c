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

//! Command stream assembler tests
//! Fixed-length framing, poly-line termination, and chunked delivery

use super::super::assembler::CommandAssembler;
use super::super::dispatch::DispatchTable;
use super::super::*;

fn feed(asm: &mut CommandAssembler, words: &[u32]) -> Vec<(u8, Vec<u32>)> {
    let table = DispatchTable::global();
    let mut out = Vec::new();
    for &w in words {
        if let Some(id) = asm.push_word(w, table) {
            out.push((id, asm.take_words()));
        }
    }
    out
}

#[test]
fn test_fixed_length_framing() {
    let mut asm = CommandAssembler::new();

    // Flat triangle: exactly 4 words
    let done = feed(
        &mut asm,
        &[0x2000_00FF, 0x0010_0010, 0x0020_0020, 0x0030_0030],
    );
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].0, 0x20);
    assert_eq!(done[0].1.len(), 4);
    assert!(!asm.is_accumulating());
}

#[test]
fn test_partial_command_survives() {
    let mut asm = CommandAssembler::new();

    assert!(feed(&mut asm, &[0x2000_00FF, 0x0010_0010]).is_empty());
    assert!(asm.is_accumulating());
    assert_eq!(asm.buffered_len(), 2);

    let done = feed(&mut asm, &[0x0020_0020, 0x0030_0030]);
    assert_eq!(done.len(), 1);
}

#[test]
fn test_back_to_back_commands() {
    let mut asm = CommandAssembler::new();

    // Two one-word commands in a single chunk
    let done = feed(&mut asm, &[0xE100_0000, 0xE600_0003]);
    assert_eq!(done.len(), 2);
    assert_eq!(done[0].0, 0xE1);
    assert_eq!(done[1].0, 0xE6);
}

#[test]
fn test_monochrome_polyline_terminator() {
    let mut asm = CommandAssembler::new();

    let done = feed(
        &mut asm,
        &[0x4800_00FF, 0x0000_0000, 0x0010_0010, 0x0020_0020, 0x5555_5555],
    );
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].1.len(), 5); // Terminator stays in the buffer
}

#[test]
fn test_polyline_legacy_terminator() {
    let mut asm = CommandAssembler::new();

    let done = feed(&mut asm, &[0x4800_00FF, 0x0000_0000, 0x0010_0010, 0x5000_5000]);
    assert_eq!(done.len(), 1);
}

#[test]
fn test_polyline_minimum_before_terminator() {
    let mut asm = CommandAssembler::new();

    // A terminator-shaped word cannot end the command before the family
    // minimum (cmd + 2 vertices for the monochrome form)
    assert!(feed(&mut asm, &[0x4800_00FF, 0x5555_5555]).is_empty());
    assert!(asm.is_accumulating());
}

#[test]
fn test_shaded_polyline_terminator_only_on_color_slots() {
    let mut asm = CommandAssembler::new();

    // (color, vertex) pairs: a vertex word that happens to match the
    // terminator pattern must not end the strip
    let done = feed(
        &mut asm,
        &[
            0x5800_00FF, // cmd + color 1
            0x0000_0000, // vertex 1
            0x0000_FF00, // color 2
            0x5000_5000, // vertex 2 (terminator-shaped, but a vertex slot)
        ],
    );
    assert!(done.is_empty());
    assert!(asm.is_accumulating());

    // The next word is a color slot: the real terminator lands
    let done = feed(&mut asm, &[0x5555_5555]);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].1.len(), 5);
}

#[test]
fn test_polyline_forced_termination_at_max() {
    let mut asm = CommandAssembler::new();
    let table = DispatchTable::global();

    // Monochrome poly-line with no terminator: forced cut at 254 words
    let mut dispatched = None;
    asm.push_word(0x4800_00FF, table);
    for i in 1..=253u32 {
        if let Some(id) = asm.push_word(i << 4, table) {
            dispatched = Some((id, asm.buffered_len()));
            break;
        }
    }
    let (id, len) = dispatched.expect("forced termination");
    assert_eq!(id, 0x48);
    assert_eq!(len, 254);
}

#[test]
fn test_reset_discards_partial_command() {
    let mut asm = CommandAssembler::new();

    feed(&mut asm, &[0x2000_00FF, 0x0010_0010]);
    asm.reset();
    assert!(!asm.is_accumulating());
    assert_eq!(asm.buffered_len(), 0);

    // A fresh command decodes cleanly afterwards
    let done = feed(&mut asm, &[0xE100_0000]);
    assert_eq!(done.len(), 1);
}

#[test]
fn test_chunked_delivery_matches_single_shot() {
    // The same stream split at every possible boundary yields the same
    // primitives
    let stream = [
        0x3000_00FF,
        0x0010_0010,
        0x0000_FF00,
        0x0020_0020,
        0x00FF_0000,
        0x0030_0030, // Gouraud triangle
        0x6000_00FF,
        0x0040_0040,
        0x0008_0008, // Variable-size rect
    ];

    let mut single = GPU::new();
    assert!(single.write_gp0_slice(&stream).is_none());
    let expected = single.drain_primitives();
    assert_eq!(expected.len(), 2);

    for split in 1..stream.len() {
        let mut gpu = GPU::new();
        assert!(gpu.write_gp0_slice(&stream[..split]).is_none());
        assert!(gpu.write_gp0_slice(&stream[split..]).is_none());
        let got = gpu.drain_primitives();
        assert_eq!(got.len(), expected.len(), "split at {split}");
        for (a, b) in got.iter().zip(expected.iter()) {
            assert_eq!(a.0, b.0, "split at {split}");
        }
    }
}
