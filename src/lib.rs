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

//! PlayStation 1 GPU command core library
//!
//! This library emulates the command-processing core of the PlayStation GPU:
//! it consumes streams of 32-bit GP0 (drawing/data) and GP1 (control) words,
//! decodes them into typed drawing, attribute, and transfer operations,
//! maintains the GPUSTAT register and the 1024×512 VRAM framebuffer, and
//! queues decoded primitives for an external rendering backend.
//!
//! # Example
//!
//! ```
//! use psgpu::core::GPU;
//!
//! let mut gpu = GPU::new();
//!
//! // Flat-shaded triangle: command word + three vertices
//! gpu.write_gp0(0x20FF0000);
//! gpu.write_gp0(0x00000000);
//! gpu.write_gp0(0x00000040);
//! gpu.write_gp0(0x00400040);
//!
//! assert_eq!(gpu.drain_primitives().len(), 1);
//! ```

pub mod core;
