//! Reflector property fuzzing.
//!
//! The staged-mask reflection must be an involution and must agree with
//! core's `reverse_bits` on every width.

#![no_main]

use arbitrary::Arbitrary;
use checksum::reflect::{reflect8, reflect16, reflect32, reflect64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  v8: u8,
  v16: u16,
  v32: u32,
  v64: u64,
}

fuzz_target!(|input: Input| {
  assert_eq!(reflect8(input.v8), input.v8.reverse_bits());
  assert_eq!(reflect16(input.v16), input.v16.reverse_bits());
  assert_eq!(reflect32(input.v32), input.v32.reverse_bits());
  assert_eq!(reflect64(input.v64), input.v64.reverse_bits());

  assert_eq!(reflect8(reflect8(input.v8)), input.v8);
  assert_eq!(reflect16(reflect16(input.v16)), input.v16);
  assert_eq!(reflect32(reflect32(input.v32)), input.v32);
  assert_eq!(reflect64(reflect64(input.v64)), input.v64);
});
