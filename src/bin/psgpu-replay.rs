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

use std::fs;

use clap::Parser;
use log::{info, warn};
use psgpu::core::error::Result;
use psgpu::core::{Primitive, GPU};

/// GPU command trace replay tool
///
/// Replays a binary trace of register writes against the command core.
/// The trace is a sequence of 8-byte little-endian records: a port word
/// (0 = GP0, 1 = GP1) followed by the written value.
#[derive(Parser)]
#[command(name = "psgpu-replay")]
#[command(about = "Replay a GPU command trace", long_about = None)]
struct Args {
    /// Path to the trace file
    trace_file: String,

    /// Write the final VRAM image (raw little-endian 1024×512×16bit)
    #[arg(short = 'o', long)]
    vram_out: Option<String>,

    /// Write a save-state of the final GPU state
    #[arg(short = 's', long)]
    state_out: Option<String>,

    /// Replay with frame skipping enabled
    #[arg(long)]
    frame_skip: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("psgpu-replay v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    info!("Loading trace from: {}", args.trace_file);
    let trace = fs::read(&args.trace_file)?;
    if trace.len() % 8 != 0 {
        warn!("Trace length {} is not record-aligned; tail ignored", trace.len());
    }

    let mut gpu = GPU::new();
    gpu.reset();
    gpu.set_frame_skip(args.frame_skip);

    let mut gp0_words = 0usize;
    let mut gp1_words = 0usize;
    let mut triangles = 0usize;
    let mut quads = 0usize;
    let mut lines = 0usize;
    let mut rects = 0usize;

    for record in trace.chunks_exact(8) {
        let port = u32::from_le_bytes([record[0], record[1], record[2], record[3]]);
        let word = u32::from_le_bytes([record[4], record[5], record[6], record[7]]);

        match port {
            0 => {
                gpu.write_gp0(word);
                gp0_words += 1;
            }
            1 => {
                gpu.write_gp1(word);
                gp1_words += 1;
            }
            other => warn!("Unknown port {} in trace record; skipped", other),
        }

        for (primitive, _) in gpu.drain_primitives() {
            match primitive {
                Primitive::Triangle { .. } => triangles += 1,
                Primitive::Quad { .. } => quads += 1,
                Primitive::Line { .. } => lines += 1,
                Primitive::Rect { .. } => rects += 1,
            }
        }
    }

    info!("Replay complete: {} GP0 words, {} GP1 words", gp0_words, gp1_words);
    info!(
        "Primitives: {} triangles, {} quads, {} lines, {} rects",
        triangles, quads, lines, rects
    );
    info!("Final GPUSTAT: 0x{:08X}", gpu.read_status());

    if let Some(path) = &args.vram_out {
        fs::write(path, gpu.vram_bytes())?;
        info!("VRAM image written to: {}", path);
    }

    if let Some(path) = &args.state_out {
        gpu.freeze().save_to_file(path)?;
        info!("Save-state written to: {}", path);
    }

    Ok(())
}
