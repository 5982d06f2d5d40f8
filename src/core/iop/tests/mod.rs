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

//! IOP test modules
//!
//! - `basic`: construction, reset, register access, snapshots
//! - `execution`: fetch/step, delay slots, jumps, fault rollback
//! - `exceptions`: SYSCALL entry, EPC/BD, vectors, RFE
//! - `cop0`: COP0 register semantics and cache isolation





use super::*;

/// Base of the test programs (KSEG0 view of physical 0)
const PROGRAM_BASE: u32 = 0x8000_0000;

/// IOP with `program` at [`PROGRAM_BASE`] and the PC pointing at it
fn iop_with_program(program: &[u32]) -> Iop {
    let mut iop = Iop::new();
    load_words(&mut iop, PROGRAM_BASE, program);
    iop.set_pc(PROGRAM_BASE);
    iop
}

fn load_words(iop: &mut Iop, address: u32, words: &[u32]) {
    let image: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    iop.load_program(address, &image).unwrap();
}
