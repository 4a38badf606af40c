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

/// GPU core error types
use thiserror::Error;

/// Result type for GPU core operations
pub type Result<T> = std::result::Result<T, GpuError>;

/// Main error type for the GPU core
///
/// Command processing itself never fails: the hardware has no error channel
/// to software, so malformed input degrades to the documented silent-ignore
/// or forced-termination behavior. Errors only surface at the save-state
/// (freeze) boundary.
#[derive(Error, Debug)]
pub enum GpuError {
    #[error("Freeze version mismatch: got {got} (expected {expected})")]
    FreezeVersionMismatch { expected: u32, got: u32 },

    #[error("Invalid freeze size: {got} bytes (expected {expected})")]
    FreezeSizeMismatch { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
