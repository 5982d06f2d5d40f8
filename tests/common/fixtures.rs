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

//! Test fixtures for common test scenarios

use psrx_iop::core::iop::Iop;

/// Where fixture programs are loaded (KSEG0 view of physical 0x10000)
#[allow(dead_code)]
pub const PROGRAM_BASE: u32 = 0x8001_0000;

/// Encode instruction words as a little-endian image
#[allow(dead_code)]
pub fn program_image(program: &[u32]) -> Vec<u8> {
    program.iter().flat_map(|word| word.to_le_bytes()).collect()
}

/// Create an IOP with `program` loaded at [`PROGRAM_BASE`] and the PC on it
#[allow(dead_code)]
pub fn create_iop_with_program(program: &[u32]) -> Iop {
    let mut iop = Iop::new();
    iop.load_program(PROGRAM_BASE, &program_image(program))
        .expect("Failed to load program");
    iop.set_pc(PROGRAM_BASE);
    iop
}

/// Execute N instructions, panicking on the first fault
#[allow(dead_code)]
pub fn execute_n_instructions(iop: &mut Iop, n: usize) {
    for i in 0..n {
        if let Err(e) = iop.step() {
            panic!("IOP faulted after {} instructions: {}", i, e);
        }
    }
}
