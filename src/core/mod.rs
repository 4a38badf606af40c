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

//! Core emulation components
//!
//! This module contains the GPU command core:
//! - GPU (command decode, GPUSTAT register, VRAM, primitive queue)
//! - Save-state (freeze) serialization
//! - Error types

pub mod error;
pub mod gpu;

// Re-export commonly used types
pub use error::{GpuError, Result};
pub use gpu::freeze::FreezeData;
pub use gpu::{AttributeSnapshot, Primitive, GPU};
