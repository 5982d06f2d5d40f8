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

//! Small test programs

/// NOP sled
#[allow(dead_code)]
pub fn test_program_nop_loop() -> Vec<u32> {
    vec![
        0x00000000, // NOP
        0x00000000, // NOP
        0x00000000, // NOP
        0x00000000, // NOP
    ]
}

/// Register arithmetic
#[allow(dead_code)]
pub fn test_program_basic_arithmetic() -> Vec<u32> {
    vec![
        0x24010001, // ADDIU $1, $0, 1      ; $1 = 1
        0x24020002, // ADDIU $2, $0, 2      ; $2 = 2
        0x00221820, // ADD   $3, $1, $2     ; $3 = 3
        0x00231023, // SUBU  $2, $1, $3     ; $2 = -2
        0x00021043, // SRA   $2, $2, 1      ; $2 = -1
    ]
}

/// Store a word, read it back through a different segment
#[allow(dead_code)]
pub fn test_program_load_store() -> Vec<u32> {
    vec![
        0x3C018002, // LUI   $1, 0x8002     ; $1 = 0x80020000
        0x240200AA, // ADDIU $2, $0, 0xAA   ; $2 = 0xAA
        0xAC220000, // SW    $2, 0($1)      ; Store to 0x80020000
        0x3C01A002, // LUI   $1, 0xA002     ; KSEG1 mirror
        0x8C230000, // LW    $3, 0($1)      ; Load from 0xA0020000
    ]
}

/// Taken branch with a delay slot
#[allow(dead_code)]
pub fn test_program_branch() -> Vec<u32> {
    vec![
        0x24010001, // ADDIU $1, $0, 1      ; $1 = 1
        0x24020001, // ADDIU $2, $0, 1      ; $2 = 1
        0x10220002, // BEQ   $1, $2, +2     ; taken
        0x24050005, // ADDIU $5, $0, 5      ; delay slot, executed
        0x24030042, // ADDIU $3, $0, 0x42   ; skipped
        0x24040099, // ADDIU $4, $0, 0x99   ; branch target
    ]
}

/// Unaligned word copy with LWR/LWL and SWR/SWL
#[allow(dead_code)]
pub fn test_program_unaligned_copy() -> Vec<u32> {
    vec![
        0x3C018002, // LUI   $1, 0x8002
        0x3C02DDCC, // LUI   $2, 0xDDCC
        0x3442BBAA, // ORI   $2, $2, 0xBBAA ; $2 = 0xDDCCBBAA
        0xB8220001, // SWR   $2, 1($1)
        0xA8220004, // SWL   $2, 4($1)      ; bytes 0x80020001..=0x80020004
        0x98230001, // LWR   $3, 1($1)
        0x88230004, // LWL   $3, 4($1)      ; $3 = 0xDDCCBBAA
    ]
}

/// Sum 1..=10 in a loop with MULTU/DIVU to cross-check
#[allow(dead_code)]
pub fn test_program_sum_loop() -> Vec<u32> {
    vec![
        0x2401000A, // ADDIU $1, $0, 10     ; counter
        0x24020000, // ADDIU $2, $0, 0      ; sum
        0x00411021, // loop: ADDU $2, $2, $1
        0x2421FFFF, // ADDIU $1, $1, -1
        0x1420FFFD, // BNE   $1, $0, loop
        0x00000000, // NOP (delay slot)
        0x24030002, // ADDIU $3, $0, 2
        0x00430019, // MULTU $2, $3         ; LO = 110
        0x00002012, // MFLO  $4
        0x2405000B, // ADDIU $5, $0, 11
        0x0085001B, // DIVU  $4, $5         ; LO = 10, HI = 0
        0x00003012, // MFLO  $6
        0x00003810, // MFHI  $7
    ]
}

/// Subroutine calls through JAL/JR and JALR, ending in a self loop
#[allow(dead_code)]
pub fn test_program_call() -> Vec<u32> {
    vec![
        0x0C00400A, // JAL   double
        0x24040015, // ADDIU $4, $0, 21     ; delay slot: argument
        0x00402821, // ADDU  $5, $2, $0     ; $5 = 42
        0x3C088001, // LUI   $8, 0x8001
        0x35080028, // ORI   $8, $8, 0x28   ; $8 = double
        0x0100F809, // JALR  $31, $8
        0x24040032, // ADDIU $4, $0, 50     ; delay slot: argument
        0x00403021, // ADDU  $6, $2, $0     ; $6 = 100
        0x1000FFFF, // halt: BEQ $0, $0, halt
        0x00000000, // NOP
        0x00841021, // double: ADDU $2, $4, $4
        0x03E00008, // JR    $31
        0x00000000, // NOP
    ]
}
