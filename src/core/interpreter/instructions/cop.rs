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

//! Coprocessor move and return-from-exception instructions
//!
//! The interpreter only routes these; register storage and the
//! status-register mode stack belong to the context.

use super::super::context::ExecutionContext;
use super::super::decode::{cop_id, rd, rt};
use super::super::Result;

/// MFCz: Move From Coprocessor
///
/// Format: mfcz rt, rd
/// Operation: rt = COPz[rd]
pub(super) fn op_mfc<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    ctx.mfc(cop_id(instr), rd(instr), rt(instr));
    Ok(())
}

/// MTCz: Move To Coprocessor
///
/// Format: mtcz rt, rd
/// Operation: COPz[rd] = rt
pub(super) fn op_mtc<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    ctx.mtc(cop_id(instr), rd(instr), rt(instr));
    Ok(())
}

/// RFE: Return From Exception
pub(super) fn op_rfe<C: ExecutionContext>(ctx: &mut C, _instr: u32) -> Result<()> {
    ctx.rfe();
    Ok(())
}
