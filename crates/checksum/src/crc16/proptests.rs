extern crate std;

use proptest::prelude::*;
use traits::Checksum;

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Cross-validation against the `crc` crate (CRC RevEng catalogue parameters)
// ─────────────────────────────────────────────────────────────────────────────

const ORACLE_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);
const ORACLE_KERMIT: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_KERMIT);
const ORACLE_IBM_3740: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740);
const ORACLE_SPI_FUJITSU: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_SPI_FUJITSU);

fn assert_streaming_matches<C: Checksum<Output = u16>>(oracle: &crc::Crc<u16>, data: &[u8], chunk: usize) {
  let mut ours = C::new();
  let mut reference = oracle.digest();

  for part in data.chunks(chunk.max(1)) {
    ours.update(part);
    reference.update(part);
  }

  assert_eq!(ours.finalize(), reference.finalize());
}

proptest! {
  #[test]
  fn xmodem_matches_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16Xmodem::checksum(&data), ORACLE_XMODEM.checksum(&data));
  }

  #[test]
  fn kermit_matches_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16Kermit::checksum(&data), ORACLE_KERMIT.checksum(&data));
  }

  #[test]
  fn ibm_3740_matches_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16Ibm3740::checksum(&data), ORACLE_IBM_3740.checksum(&data));
  }

  #[test]
  fn spi_fujitsu_matches_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16SpiFujitsu::checksum(&data), ORACLE_SPI_FUJITSU.checksum(&data));
  }

  #[test]
  fn streaming_matches_catalogue(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    assert_streaming_matches::<Crc16Xmodem>(&ORACLE_XMODEM, &data, chunk);
    assert_streaming_matches::<Crc16Kermit>(&ORACLE_KERMIT, &data, chunk);
    assert_streaming_matches::<Crc16Ibm3740>(&ORACLE_IBM_3740, &data, chunk);
    assert_streaming_matches::<Crc16SpiFujitsu>(&ORACLE_SPI_FUJITSU, &data, chunk);
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Engine/preset equivalence and structural properties
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn runtime_engine_matches_presets(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(Crc16::checksum(Crc16Params::XMODEM, &data), Crc16Xmodem::checksum(&data));
    prop_assert_eq!(Crc16::checksum(Crc16Params::KERMIT, &data), Crc16Kermit::checksum(&data));
    prop_assert_eq!(Crc16::checksum(Crc16Params::IBM_3740, &data), Crc16Ibm3740::checksum(&data));
    prop_assert_eq!(
      Crc16::checksum(Crc16Params::SPI_FUJITSU, &data),
      Crc16SpiFujitsu::checksum(&data)
    );
  }

  #[test]
  fn arbitrary_params_are_chunk_invariant(
    poly in any::<u16>(),
    init in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    split in any::<usize>()
  ) {
    let params = Crc16Params::new(poly, init, reflect_in, reflect_out, xor_out);
    let split = if data.is_empty() { 0 } else { split % (data.len() + 1) };

    let oneshot = Crc16::checksum(params, &data);

    let mut chunked = Crc16::new(params);
    chunked.update(&data[..split]);
    chunked.update(&data[split..]);
    prop_assert_eq!(chunked.finalize(), oneshot);
  }

  #[test]
  fn arbitrary_params_resume_round_trips(
    poly in any::<u16>(),
    init in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    split in any::<usize>()
  ) {
    let params = Crc16Params::new(poly, init, reflect_in, reflect_out, xor_out);
    let split = if data.is_empty() { 0 } else { split % (data.len() + 1) };

    let mut first = Crc16::new(params);
    first.update(&data[..split]);

    let mut resumed = Crc16::resume(params, first.finalize());
    resumed.update(&data[split..]);
    prop_assert_eq!(resumed.finalize(), Crc16::checksum(params, &data));
  }

  #[test]
  fn update_vectored_matches_update(
    a in proptest::collection::vec(any::<u8>(), 0..=256),
    b in proptest::collection::vec(any::<u8>(), 0..=256),
    c in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let mut flat = Crc16Kermit::new();
    flat.update(&a);
    flat.update(&b);
    flat.update(&c);

    let mut vectored = Crc16Kermit::new();
    vectored.update_vectored(&[&a, &b, &c]);

    prop_assert_eq!(flat.finalize(), vectored.finalize());
  }
}
