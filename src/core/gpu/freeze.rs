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

//! Save-state (freeze) serialization
//!
//! The freeze record is bit-compatible with the legacy plugin format so
//! states travel between implementations: a version word, the packed
//! GPUSTAT value, the 256-entry control latch array, and the full VRAM
//! byte image, all little-endian, fixed size. Round-trips are
//! byte-for-byte.
//!
//! # Layout
//!
//! ```text
//! Offset 0x000000: version   (u32 LE)
//! Offset 0x000004: status    (u32 LE)
//! Offset 0x000008: control   (256 × u32 LE, GP1 latch array)
//! Offset 0x000408: VRAM      (1,048,576 bytes, 16-bit LE texels)
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::{GpuError, Result};

use super::vram::VRAM_BYTES;

/// Freeze format version
///
/// Incremented only if the legacy layout ever changes; loading a record
/// with a different version fails.
pub const FREEZE_VERSION: u32 = 1;

/// Total serialized size in bytes
pub const FREEZE_SIZE: usize = 4 + 4 + 256 * 4 + VRAM_BYTES;

/// A complete GPU freeze record
///
/// # Examples
///
/// ```
/// use psgpu::core::GPU;
///
/// let mut gpu = GPU::new();
/// gpu.write_vram(10, 10, 0x7FFF);
///
/// let frozen = gpu.freeze();
/// gpu.write_vram(10, 10, 0x0000);
///
/// gpu.unfreeze(&frozen);
/// assert_eq!(gpu.read_vram(10, 10), 0x7FFF);
/// ```
#[derive(Clone, Debug)]
pub struct FreezeData {
    /// Format version
    pub version: u32,

    /// Packed GPUSTAT value
    pub status: u32,

    /// GP1 control latch array (one slot per raw command id)
    pub control: [u32; 256],

    /// Full VRAM image, little-endian texels
    pub vram: Vec<u8>,
}

impl FreezeData {
    /// Serialize to the fixed legacy byte layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FREEZE_SIZE);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.status.to_le_bytes());
        for word in &self.control {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&self.vram);
        out
    }

    /// Deserialize from the fixed legacy byte layout
    ///
    /// # Errors
    ///
    /// Fails on a size or version mismatch; the blob is not partially
    /// applied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FREEZE_SIZE {
            return Err(GpuError::FreezeSizeMismatch {
                expected: FREEZE_SIZE,
                got: bytes.len(),
            });
        }

        let word = |offset: usize| {
            u32::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        };

        let version = word(0);
        if version != FREEZE_VERSION {
            return Err(GpuError::FreezeVersionMismatch {
                expected: FREEZE_VERSION,
                got: version,
            });
        }

        let status = word(4);
        let mut control = [0u32; 256];
        for (i, slot) in control.iter_mut().enumerate() {
            *slot = word(8 + i * 4);
        }
        let vram = bytes[8 + 256 * 4..].to_vec();

        Ok(Self {
            version,
            status,
            control,
            vram,
        })
    }

    /// Write the record to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a record back from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut bytes = Vec::with_capacity(FREEZE_SIZE);
        file.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }
}
