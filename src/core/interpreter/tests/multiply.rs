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

use super::{r_type, MockContext};
use crate::core::error::InterpreterError;
use crate::core::interpreter::{interpret, ExecutionContext};

const MULTU: u32 = 0x19;
const DIV: u32 = 0x1A;
const DIVU: u32 = 0x1B;

#[test]
fn test_multu_full_product() {
    let mut ctx = MockContext::new().with_reg(1, 0xFFFF_FFFF).with_reg(2, 0xFFFF_FFFF);
    interpret(&mut ctx, r_type(MULTU, 1, 2, 0, 0)).unwrap();

    // 0xFFFFFFFF^2 = 0xFFFFFFFE_00000001
    assert_eq!(ctx.hi(), 0xFFFF_FFFE);
    assert_eq!(ctx.lo(), 0x0000_0001);
}

#[test]
fn test_multu_carries_into_hi() {
    // 5 * 1_000_000_000 = 0x1_2A05_F200
    let mut ctx = MockContext::new().with_reg(1, 5).with_reg(2, 1_000_000_000);
    interpret(&mut ctx, r_type(MULTU, 1, 2, 0, 0)).unwrap();
    assert_eq!(ctx.hi(), 1);
    assert_eq!(ctx.lo(), 0x2A05_F200);
}

#[test]
fn test_multu_small_product() {
    let mut ctx = MockContext::new().with_reg(1, 0xFFFF_FFFF).with_reg(2, 2);
    interpret(&mut ctx, r_type(MULTU, 1, 2, 0, 0)).unwrap();
    assert_eq!(ctx.hi(), 1);
    assert_eq!(ctx.lo(), 0xFFFF_FFFE);
}

#[test]
fn test_div_signed() {
    // -7 / 2 = -3 remainder -1
    let mut ctx = MockContext::new().with_reg(1, (-7i32) as u32).with_reg(2, 2);
    interpret(&mut ctx, r_type(DIV, 1, 2, 0, 0)).unwrap();
    assert_eq!(ctx.lo(), (-3i32) as u32);
    assert_eq!(ctx.hi(), (-1i32) as u32);
}

#[test]
fn test_div_overflow_wraps() {
    let mut ctx = MockContext::new()
        .with_reg(1, 0x8000_0000)
        .with_reg(2, 0xFFFF_FFFF);
    interpret(&mut ctx, r_type(DIV, 1, 2, 0, 0)).unwrap();
    assert_eq!(ctx.lo(), 0x8000_0000);
    assert_eq!(ctx.hi(), 0);
}

#[test]
fn test_divu() {
    let mut ctx = MockContext::new().with_reg(1, 0xFFFF_FFFF).with_reg(2, 0x10);
    interpret(&mut ctx, r_type(DIVU, 1, 2, 0, 0)).unwrap();
    assert_eq!(ctx.lo(), 0x0FFF_FFFF);
    assert_eq!(ctx.hi(), 0xF);
}

#[test]
fn test_div_by_zero_is_fatal() {
    let mut ctx = MockContext::new().with_reg(1, 100);
    ctx.hi = 0x1111_1111;
    ctx.lo = 0x2222_2222;

    let err = interpret(&mut ctx, r_type(DIV, 1, 2, 0, 0)).unwrap_err();
    assert_eq!(err, InterpreterError::DivisionByZero { signed: true });
    assert_eq!(err.to_string(), "DIV division by zero");

    // HI/LO untouched
    assert_eq!(ctx.hi(), 0x1111_1111);
    assert_eq!(ctx.lo(), 0x2222_2222);
}

#[test]
fn test_divu_by_zero_is_fatal() {
    let mut ctx = MockContext::new().with_reg(1, 100);
    ctx.hi = 0x1111_1111;
    ctx.lo = 0x2222_2222;

    let err = interpret(&mut ctx, r_type(DIVU, 1, 0, 0, 0)).unwrap_err();
    assert_eq!(err, InterpreterError::DivisionByZero { signed: false });
    assert_eq!(err.to_string(), "DIVU division by zero");
    assert_eq!(ctx.hi(), 0x1111_1111);
    assert_eq!(ctx.lo(), 0x2222_2222);
}

#[test]
fn test_hi_lo_transfers() {
    let mut ctx = MockContext::new().with_reg(1, 0xAAAA_0001).with_reg(2, 0xBBBB_0002);

    interpret(&mut ctx, r_type(0x11, 1, 0, 0, 0)).unwrap(); // MTHI $1
    interpret(&mut ctx, r_type(0x13, 2, 0, 0, 0)).unwrap(); // MTLO $2
    assert_eq!(ctx.hi(), 0xAAAA_0001);
    assert_eq!(ctx.lo(), 0xBBBB_0002);

    interpret(&mut ctx, r_type(0x10, 0, 0, 3, 0)).unwrap(); // MFHI $3
    interpret(&mut ctx, r_type(0x12, 0, 0, 4, 0)).unwrap(); // MFLO $4
    assert_eq!(ctx.gpr(3), 0xAAAA_0001);
    assert_eq!(ctx.gpr(4), 0xBBBB_0002);
}
