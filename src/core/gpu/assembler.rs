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

//! Command stream assembler
//!
//! A small state machine that buffers incoming GP0 words into the current
//! command until its length is known, then reports it ready for dispatch.
//! Input arrives in arbitrary-sized chunks not aligned to command
//! boundaries, so a partial command must survive across calls.
//!
//! Poly-lines have no declared length: they run until a termination word
//! appears (checked only on color slots for the shaded form, preserving
//! the (color, vertex) pair alignment) or until the family maximum, at
//! which point the command is force-terminated and dispatched as-is.

use super::dispatch::{CommandLength, DispatchTable, MAX_COMMAND_WORDS};
use super::fields;

/// Assembler framing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No words buffered
    Idle,

    /// Buffering a fixed-length command
    Fixed { target: usize },

    /// Buffering a poly-line until the terminator or the family maximum
    PolyLine { min: usize, max: usize, shaded: bool },
}

/// The GP0 command stream assembler
///
/// Owns the single in-progress command buffer; at most one command is in
/// flight at any time. Transfer-passthrough (image-load payload routing)
/// is handled by the controller before words reach the assembler.
pub struct CommandAssembler {
    buffer: Vec<u32>,
    state: State,
}

impl CommandAssembler {
    /// Create an idle assembler with an empty buffer
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(MAX_COMMAND_WORDS),
            state: State::Idle,
        }
    }

    /// Discard any partial command and return to idle
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = State::Idle;
    }

    /// Whether a command is currently being accumulated
    pub fn is_accumulating(&self) -> bool {
        self.state != State::Idle
    }

    /// Number of words buffered for the in-progress command
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Feed one word; returns the command id when the buffer is complete
    ///
    /// The caller takes the finished buffer with [`take_words`] and runs
    /// the dispatch. Unknown ids carry a one-word discard entry in the
    /// table, so they complete (and no-op) immediately.
    ///
    /// [`take_words`]: CommandAssembler::take_words
    pub fn push_word(&mut self, word: u32, table: &DispatchTable) -> Option<u8> {
        if self.state == State::Idle {
            let id = fields::command_id(word);
            self.state = match table.entry(id).length {
                CommandLength::Fixed(n) => State::Fixed { target: n as usize },
                CommandLength::Variable { min, max } => State::PolyLine {
                    min: min as usize,
                    max: max as usize,
                    shaded: id & 0x10 != 0,
                },
            };
        }

        // A buffer past the declared maximum means the table itself is
        // wrong; external input cannot get here.
        debug_assert!(self.buffer.len() < MAX_COMMAND_WORDS);
        self.buffer.push(word);

        let done = match self.state {
            State::Idle => unreachable!("state set above"),
            State::Fixed { target } => self.buffer.len() >= target,
            State::PolyLine { min, max, shaded } => {
                let len = self.buffer.len();
                if len >= max {
                    // Malformed strip with no terminator: forced end
                    true
                } else if len >= min {
                    // Shaded strips only test the terminator on color
                    // slots (even buffer indices)
                    let color_slot = !shaded || (len - 1) % 2 == 0;
                    color_slot && fields::is_polyline_terminator(word)
                } else {
                    false
                }
            }
        };

        if done {
            self.state = State::Idle;
            Some(fields::command_id(self.buffer[0]))
        } else {
            None
        }
    }

    /// Take the finished command buffer, leaving the assembler idle
    ///
    /// The returned vector keeps its allocation with the caller; the
    /// assembler starts the next command with a fresh buffer.
    pub fn take_words(&mut self) -> Vec<u32> {
        std::mem::replace(&mut self.buffer, Vec::with_capacity(MAX_COMMAND_WORDS))
    }
}

impl Default for CommandAssembler {
    fn default() -> Self {
        Self::new()
    }
}
