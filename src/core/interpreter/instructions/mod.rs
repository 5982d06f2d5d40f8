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

//! Instruction handlers and opcode dispatch
//!
//! Handlers are free functions generic over the execution context and
//! grouped by instruction type.

use super::context::ExecutionContext;
use super::decode::{cop_id, funct, opcode, rs, rt};
use super::Result;
use crate::core::error::{DispatchLevel, InterpreterError};

mod arithmetic;
mod branch;
mod cop;
mod exception;
mod jump;
mod load;
mod logical;
mod multiply;
mod shift;
mod store;

use arithmetic::*;
use branch::*;
use cop::*;
use exception::*;
use jump::*;
use load::*;
use logical::*;
use multiply::*;
use shift::*;
use store::*;

/// Dispatch on the primary opcode (upper 6 bits)
pub(super) fn execute<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    match opcode(instr) {
        0x00 => execute_special(ctx, instr),
        0x01 => execute_regimm(ctx, instr),
        0x02 => op_j(ctx, instr),                   // J
        0x03 => op_jal(ctx, instr),                 // JAL
        0x04 => op_beq(ctx, instr),                 // BEQ
        0x05 => op_bne(ctx, instr),                 // BNE
        0x06 => op_blez(ctx, instr),                // BLEZ
        0x07 => op_bgtz(ctx, instr),                // BGTZ
        0x08 => op_addi(ctx, instr),                // ADDI
        0x09 => op_addiu(ctx, instr),               // ADDIU
        0x0A => op_slti(ctx, instr),                // SLTI
        0x0B => op_sltiu(ctx, instr),               // SLTIU
        0x0C => op_andi(ctx, instr),                // ANDI
        0x0D => op_ori(ctx, instr),                 // ORI
        0x0F => op_lui(ctx, instr),                 // LUI
        0x10..=0x13 => execute_cop(ctx, instr),     // COP0-COP3
        0x20 => op_lb(ctx, instr),                  // LB
        0x21 => op_lh(ctx, instr),                  // LH
        0x22 => op_lwl(ctx, instr),                 // LWL
        0x23 => op_lw(ctx, instr),                  // LW
        0x24 => op_lbu(ctx, instr),                 // LBU
        0x25 => op_lhu(ctx, instr),                 // LHU
        0x26 => op_lwr(ctx, instr),                 // LWR
        0x28 => op_sb(ctx, instr),                  // SB
        0x29 => op_sh(ctx, instr),                  // SH
        0x2A => op_swl(ctx, instr),                 // SWL
        0x2B => op_sw(ctx, instr),                  // SW
        0x2E => op_swr(ctx, instr),                 // SWR
        op => Err(unknown(DispatchLevel::Primary, op as u16)),
    }
}

/// Handle SPECIAL instructions (opcode 0x00), selected by the funct field
fn execute_special<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    match funct(instr) {
        0x00 => op_sll(ctx, instr),     // SLL
        0x02 => op_srl(ctx, instr),     // SRL
        0x03 => op_sra(ctx, instr),     // SRA
        0x04 => op_sllv(ctx, instr),    // SLLV
        0x06 => op_srlv(ctx, instr),    // SRLV
        0x07 => op_srav(ctx, instr),    // SRAV
        0x08 => op_jr(ctx, instr),      // JR
        0x09 => op_jalr(ctx, instr),    // JALR
        0x0C => op_syscall(ctx, instr), // SYSCALL
        0x10 => op_mfhi(ctx, instr),    // MFHI
        0x11 => op_mthi(ctx, instr),    // MTHI
        0x12 => op_mflo(ctx, instr),    // MFLO
        0x13 => op_mtlo(ctx, instr),    // MTLO
        0x19 => op_multu(ctx, instr),   // MULTU
        0x1A => op_div(ctx, instr),     // DIV
        0x1B => op_divu(ctx, instr),    // DIVU
        0x20 => op_add(ctx, instr),     // ADD
        0x21 => op_addu(ctx, instr),    // ADDU
        0x23 => op_subu(ctx, instr),    // SUBU
        0x24 => op_and(ctx, instr),     // AND
        0x25 => op_or(ctx, instr),      // OR
        0x26 => op_xor(ctx, instr),     // XOR
        0x27 => op_nor(ctx, instr),     // NOR
        0x2A => op_slt(ctx, instr),     // SLT
        0x2B => op_sltu(ctx, instr),    // SLTU
        op => Err(unknown(DispatchLevel::Special, op as u16)),
    }
}

/// Handle REGIMM instructions (opcode 0x01), selected by the rt field
fn execute_regimm<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    match rt(instr) {
        0x00 => op_bltz(ctx, instr), // BLTZ
        0x01 => op_bgez(ctx, instr), // BGEZ
        op => Err(unknown(DispatchLevel::Regimm, op as u16)),
    }
}

/// Handle coprocessor instructions (opcodes 0x10-0x13)
///
/// The sub-opcode combines the coprocessor id with the rs field, so only
/// the COP0 forms below are recognized.
fn execute_cop<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let op = ((cop_id(instr) as u16) << 8) | rs(instr) as u16;

    match op {
        0x000 => op_mfc(ctx, instr), // MFC0
        0x004 => op_mtc(ctx, instr), // MTC0
        0x010 => op_rfe(ctx, instr), // RFE
        _ => Err(unknown(DispatchLevel::Cop, op)),
    }
}

#[cold]
fn unknown(level: DispatchLevel, op: u16) -> InterpreterError {
    InterpreterError::UnknownOpcode { level, op }
}
