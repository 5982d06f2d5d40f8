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

//! PlayStation I/O processor (IOP) interpreter library
//!
//! This library provides the instruction-execution core of the MIPS R3000A
//! I/O processor: a stateless interpreter that applies one instruction word
//! to an execution context, plus a reference IOP context with RAM and COP0
//! to run it against.
//!
//! # Example
//!
//! ```
//! use psrx_iop::core::interpreter::interpret;
//! use psrx_iop::core::iop::Iop;
//!
//! let mut iop = Iop::new();
//!
//! // LUI $1, 0x1234 ; ORI $1, $1, 0x5678
//! interpret(&mut iop, 0x3C011234).unwrap();
//! interpret(&mut iop, 0x34215678).unwrap();
//! assert_eq!(iop.reg(1), 0x12345678);
//! ```

pub mod core;
