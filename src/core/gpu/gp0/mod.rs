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

//! GP0 (rendering/data channel) command handlers
//!
//! Handlers are invoked by the dispatch table once the assembler has a
//! complete command buffer. Geometry handlers decode through the view
//! types and queue a primitive record; attribute handlers mutate the
//! attribute context and status register in place.

mod drawing_mode;
mod fill;
mod line;
mod polygon;
mod rectangle;
mod transfer;
