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

//! Exception-triggering instructions

use super::super::context::ExecutionContext;
use super::super::Result;

/// SYSCALL: System Call
///
/// Signals the system call exception to the context. Vectoring, EPC and
/// the CAUSE code are handled there.
///
/// ```text
/// SYSCALL  # Trigger system call exception
/// ```
pub(super) fn op_syscall<C: ExecutionContext>(ctx: &mut C, _instr: u32) -> Result<()> {
    ctx.syscall_exception();
    Ok(())
}
