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

//! Store instructions

use super::super::context::ExecutionContext;
use super::super::decode::{effective_address, rs, rt};
use super::super::Result;

/// SWL memory mask, indexed by `address & 3`
const SWL_MASK: [u32; 4] = [0x0000_00FF, 0x0000_FFFF, 0x00FF_FFFF, 0xFFFF_FFFF];
/// SWL right shift applied to the source register
const SWL_SHIFT: [u32; 4] = [24, 16, 8, 0];

/// SWR memory mask, indexed by `address & 3`
const SWR_MASK: [u32; 4] = [0xFFFF_FFFF, 0xFFFF_FF00, 0xFFFF_0000, 0xFF00_0000];
/// SWR left shift applied to the source register
const SWR_SHIFT: [u32; 4] = [0, 8, 16, 24];

#[inline(always)]
fn address<C: ExecutionContext>(ctx: &C, instr: u32) -> u32 {
    effective_address(ctx.gpr(rs(instr)), instr)
}

/// SB: Store Byte
///
/// Format: sb rt, offset(rs)
/// Operation: mem8[rs + sign_extend(offset)] = rt[7:0]
pub(super) fn op_sb<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.gpr(rt(instr)) as u8;
    ctx.write8(addr, value);
    Ok(())
}

/// SH: Store Halfword
///
/// Format: sh rt, offset(rs)
/// Operation: mem16[rs + sign_extend(offset)] = rt[15:0]
pub(super) fn op_sh<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.gpr(rt(instr)) as u16;
    ctx.write16(addr, value);
    Ok(())
}

/// SW: Store Word
///
/// Format: sw rt, offset(rs)
pub(super) fn op_sw<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.gpr(rt(instr));
    ctx.write32(addr, value);
    Ok(())
}

/// SWL: Store Word Left
///
/// Stores the most significant bytes of rt into the aligned word, from its
/// first byte up to `addr`. Bytes past `addr` keep their memory contents.
///
/// Format: swl rt, offset(rs)
pub(super) fn op_swl<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let aligned = addr & !0x3;
    let shift = (addr & 0x3) as usize;

    let reg = ctx.gpr(rt(instr)) >> SWL_SHIFT[shift];
    let word = ctx.read32(aligned);
    let merged = (word & !SWL_MASK[shift]) | (reg & SWL_MASK[shift]);
    ctx.write32(aligned, merged);
    Ok(())
}

/// SWR: Store Word Right
///
/// Stores the least significant bytes of rt into the aligned word, from
/// `addr` to its last byte. Bytes before `addr` keep their memory contents.
///
/// Format: swr rt, offset(rs)
pub(super) fn op_swr<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let aligned = addr & !0x3;
    let shift = (addr & 0x3) as usize;

    let reg = ctx.gpr(rt(instr)) << SWR_SHIFT[shift];
    let word = ctx.read32(aligned);
    let merged = (word & !SWR_MASK[shift]) | (reg & SWR_MASK[shift]);
    ctx.write32(aligned, merged);
    Ok(())
}
