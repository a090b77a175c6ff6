//! Streaming equivalence fuzzing for CRC-16.
//!
//! Verifies that for any parameter set and any chunking of any input, the
//! streaming path produces the same checksum as the one-shot path, and that
//! the runtime engine agrees with the compile-time preset types for the
//! catalogue parameter sets.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc16, Crc16Ibm3740, Crc16Kermit, Crc16Params, Crc16SpiFujitsu, Crc16Xmodem};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
  poly: u16,
  init: u16,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u16,
  chunk: u8,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let params = Crc16Params::new(input.poly, input.init, input.reflect_in, input.reflect_out, input.xor_out);
  let chunk = usize::from(input.chunk).max(1);

  let oneshot = Crc16::checksum(params, input.data);

  let mut streamed = Crc16::new(params);
  for part in input.data.chunks(chunk) {
    streamed.update(part);
  }
  assert_eq!(streamed.finalize(), oneshot, "chunking changed the checksum");

  let mut resumed = Crc16::resume(params, oneshot);
  assert_eq!(resumed.finalize(), oneshot, "resume state did not round-trip");
  resumed.update(input.data);
  let mut doubled = Crc16::new(params);
  doubled.update(input.data);
  doubled.update(input.data);
  assert_eq!(resumed.finalize(), doubled.finalize(), "resume diverged from streaming");

  // Preset types must agree with the runtime engine on their own parameters.
  assert_eq!(Crc16Xmodem::checksum(input.data), Crc16::checksum(Crc16Params::XMODEM, input.data));
  assert_eq!(Crc16Kermit::checksum(input.data), Crc16::checksum(Crc16Params::KERMIT, input.data));
  assert_eq!(
    Crc16Ibm3740::checksum(input.data),
    Crc16::checksum(Crc16Params::IBM_3740, input.data)
  );
  assert_eq!(
    Crc16SpiFujitsu::checksum(input.data),
    Crc16::checksum(Crc16Params::SPI_FUJITSU, input.data)
  );
});
