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

use super::*;

#[test]
fn test_ram_initialization() {
    let ram = Ram::new();
    assert_eq!(ram.size(), Ram::DEFAULT_SIZE);
    assert_eq!(ram.read32(0x00000000), 0);
}

#[test]
fn test_little_endian_layout() {
    let mut ram = Ram::new();
    ram.write32(0x100, 0x44332211);

    assert_eq!(ram.read8(0x100), 0x11);
    assert_eq!(ram.read8(0x101), 0x22);
    assert_eq!(ram.read8(0x102), 0x33);
    assert_eq!(ram.read8(0x103), 0x44);
    assert_eq!(ram.read16(0x100), 0x2211);
    assert_eq!(ram.read16(0x102), 0x4433);
}

#[test]
fn test_segment_mirroring() {
    let mut ram = Ram::new();
    ram.write32(0xA0001000, 0xDEADBEEF);

    assert_eq!(ram.read32(0x00001000), 0xDEADBEEF);
    assert_eq!(ram.read32(0x80001000), 0xDEADBEEF);
    assert_eq!(ram.read32(0xA0001000), 0xDEADBEEF);
}

#[test]
fn test_size_mirroring() {
    let mut ram = Ram::with_size(Ram::MIN_SIZE).unwrap();
    ram.write8(0x10, 0xAB);

    assert_eq!(ram.read8(0x10 + Ram::MIN_SIZE as u32), 0xAB);
    assert_eq!(ram.read8(0x10 + 3 * Ram::MIN_SIZE as u32), 0xAB);
}

#[test]
fn test_unaligned_access_is_byte_exact() {
    let mut ram = Ram::new();
    ram.write32(0x201, 0xAABBCCDD);

    assert_eq!(ram.read8(0x200), 0x00);
    assert_eq!(ram.read8(0x201), 0xDD);
    assert_eq!(ram.read8(0x204), 0xAA);
    assert_eq!(ram.read32(0x201), 0xAABBCCDD);
    assert_eq!(ram.read16(0x203), 0xAABB);
}

#[test]
fn test_word_access_wraps_at_top_of_ram() {
    let mut ram = Ram::with_size(Ram::MIN_SIZE).unwrap();
    let top = Ram::MIN_SIZE as u32 - 2;
    ram.write32(top, 0x11223344);

    assert_eq!(ram.read16(top), 0x3344);
    assert_eq!(ram.read16(0), 0x1122);
    assert_eq!(ram.read32(top), 0x11223344);
}

#[test]
fn test_invalid_sizes_rejected() {
    assert!(Ram::with_size(0).is_err());
    assert!(Ram::with_size(3000).is_err());
    assert!(Ram::with_size(1024).is_err());
    assert!(Ram::with_size(Ram::MIN_SIZE).is_ok());
}

#[test]
fn test_load_program() {
    let mut ram = Ram::new();
    ram.load(0x80010000, &[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();

    assert_eq!(ram.read32(0x00010000), 0x04030201);
    assert_eq!(ram.read8(0x00010004), 0x05);
}

#[test]
fn test_load_wraps_at_top_of_ram() {
    let mut ram = Ram::with_size(Ram::MIN_SIZE).unwrap();
    let top = Ram::MIN_SIZE as u32 - 2;
    ram.load(top, &[0xAA, 0xBB, 0xCC]).unwrap();

    assert_eq!(ram.read8(top), 0xAA);
    assert_eq!(ram.read8(top + 1), 0xBB);
    assert_eq!(ram.read8(0), 0xCC);
}

#[test]
fn test_load_rejects_oversized_image() {
    let mut ram = Ram::with_size(Ram::MIN_SIZE).unwrap();
    let image = vec![0u8; Ram::MIN_SIZE + 1];

    match ram.load(0, &image) {
        Err(IopError::ProgramTooLarge { size, capacity }) => {
            assert_eq!(size, Ram::MIN_SIZE + 1);
            assert_eq!(capacity, Ram::MIN_SIZE);
        }
        other => panic!("expected ProgramTooLarge, got {:?}", other),
    }
}

#[test]
fn test_clear() {
    let mut ram = Ram::new();
    ram.write32(0x40, 0xFFFFFFFF);
    ram.clear();
    assert_eq!(ram.read32(0x40), 0);
}
