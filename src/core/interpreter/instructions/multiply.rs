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

//! Multiply/divide and HI/LO transfer instructions

use super::super::context::ExecutionContext;
use super::super::decode::{rd, rs, rt};
use super::super::Result;
use crate::core::error::InterpreterError;

// === Multiply/Divide Instructions ===

/// MULTU: Multiply Unsigned
///
/// Multiplies two 32-bit unsigned integers and stores the full 64-bit
/// product in HI:LO.
///
/// Format: multu rs, rt
/// Operation: (HI, LO) = rs * rt
///
/// # Example
///
/// ```text
/// 0xFFFFFFFF * 2 = 0x1_FFFFFFFE  ->  HI = 1, LO = 0xFFFFFFFE
/// ```
pub(super) fn op_multu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let a = ctx.gpr(rs(instr)) as u64;
    let b = ctx.gpr(rt(instr)) as u64;
    let result = a * b;

    ctx.set_lo(result as u32);
    ctx.set_hi((result >> 32) as u32);
    Ok(())
}

/// DIV: Divide (signed)
///
/// Format: div rs, rt
/// Operation: LO = rs / rt, HI = rs % rt
///
/// # Errors
///
/// A zero divisor is fatal; HI and LO are left untouched.
/// `0x80000000 / -1` wraps to LO = 0x80000000, HI = 0.
pub(super) fn op_div<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let numerator = ctx.gpr(rs(instr)) as i32;
    let denominator = ctx.gpr(rt(instr)) as i32;

    if denominator == 0 {
        return Err(InterpreterError::DivisionByZero { signed: true });
    }

    ctx.set_lo(numerator.wrapping_div(denominator) as u32);
    ctx.set_hi(numerator.wrapping_rem(denominator) as u32);
    Ok(())
}

/// DIVU: Divide Unsigned
///
/// Format: divu rs, rt
/// Operation: LO = rs / rt, HI = rs % rt
///
/// # Errors
///
/// A zero divisor is fatal; HI and LO are left untouched.
pub(super) fn op_divu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let numerator = ctx.gpr(rs(instr));
    let denominator = ctx.gpr(rt(instr));

    if denominator == 0 {
        return Err(InterpreterError::DivisionByZero { signed: false });
    }

    ctx.set_lo(numerator / denominator);
    ctx.set_hi(numerator % denominator);
    Ok(())
}

// === HI/LO Transfer ===

/// MFHI: Move From HI
///
/// Format: mfhi rd
pub(super) fn op_mfhi<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.hi();
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// MTHI: Move To HI
///
/// Format: mthi rs
pub(super) fn op_mthi<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rs(instr));
    ctx.set_hi(value);
    Ok(())
}

/// MFLO: Move From LO
///
/// Format: mflo rd
pub(super) fn op_mflo<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.lo();
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// MTLO: Move To LO
///
/// Format: mtlo rs
pub(super) fn op_mtlo<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rs(instr));
    ctx.set_lo(value);
    Ok(())
}
