//! CRC-16 parameter sets (Rocksoft model, width fixed at 16).
//!
//! Every CRC-16 variant in the public catalogue is fully described by five
//! parameters. The presets here are reference data taken verbatim from the
//! CRC RevEng catalogue; nothing is derived. A new variant is added by
//! supplying its five catalogue parameters.

/// CRC-16 parameter set.
///
/// Immutable description of one catalogue variant. The engine computes a
/// checksum consistent with whatever parameters are supplied; whether those
/// parameters match a claimed variant name is the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc16Params {
  /// Generator polynomial in normal (MSB-first) form. The leading x^16
  /// coefficient is implicit: it would not fit the value type and is
  /// always 1.
  pub poly: u16,
  /// Initial register value.
  pub init: u16,
  /// Reflect each input byte before mixing it into the register.
  pub reflect_in: bool,
  /// Reflect the register before the final XOR.
  pub reflect_out: bool,
  /// Mask XORed into the output after optional reflection.
  pub xor_out: u16,
}

impl Crc16Params {
  /// Assemble a parameter set from its five catalogue values.
  #[inline]
  #[must_use]
  pub const fn new(poly: u16, init: u16, reflect_in: bool, reflect_out: bool, xor_out: u16) -> Self {
    Self {
      poly,
      init,
      reflect_in,
      reflect_out,
      xor_out,
    }
  }

  /// CRC-16/XMODEM.
  ///
  /// `poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000
  /// check=0x31C3`
  ///
  /// Aliases: CRC-16/ACORN, CRC-16/LTE, CRC-16/V-41-MSB, ZMODEM. The
  /// MSB-first form of the V.41 algorithm; used in XMODEM transfers and the
  /// MultiMediaCard interface.
  pub const XMODEM: Self = Self::new(0x1021, 0x0000, false, false, 0x0000);

  /// CRC-16/KERMIT.
  ///
  /// `poly=0x1021 init=0x0000 refin=true refout=true xorout=0x0000
  /// check=0x2189`
  ///
  /// Aliases: CRC-16/BLUETOOTH, CRC-16/CCITT, CRC-16/CCITT-TRUE,
  /// CRC-16/V-41-LSB, CRC-CCITT. The LSB-first form of the V.41 algorithm;
  /// used in Bluetooth error detection.
  pub const KERMIT: Self = Self::new(0x1021, 0x0000, true, true, 0x0000);

  /// CRC-16/IBM-3740.
  ///
  /// `poly=0x1021 init=0xFFFF refin=false refout=false xorout=0x0000
  /// check=0x29B1`
  ///
  /// Aliases: CRC-16/AUTOSAR, CRC-16/CCITT-FALSE. Commonly misidentified as
  /// CRC-CCITT, which customarily names the LSB-first form (see
  /// [`Self::KERMIT`]).
  pub const IBM_3740: Self = Self::new(0x1021, 0xFFFF, false, false, 0x0000);

  /// CRC-16/SPI-FUJITSU.
  ///
  /// `poly=0x1021 init=0x1D0F refin=false refout=false xorout=0x0000
  /// check=0xE5CC`
  ///
  /// Alias: CRC-16/AUG-CCITT. The init value is equivalent to an augment of
  /// 0xFFFF prepended to the message.
  pub const SPI_FUJITSU: Self = Self::new(0x1021, 0x1D0F, false, false, 0x0000);
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;

  #[test]
  fn presets_carry_catalogue_parameters() {
    assert_eq!(Crc16Params::XMODEM, Crc16Params::new(0x1021, 0x0000, false, false, 0x0000));
    assert_eq!(Crc16Params::KERMIT, Crc16Params::new(0x1021, 0x0000, true, true, 0x0000));
    assert_eq!(Crc16Params::IBM_3740, Crc16Params::new(0x1021, 0xFFFF, false, false, 0x0000));
    assert_eq!(
      Crc16Params::SPI_FUJITSU,
      Crc16Params::new(0x1021, 0x1D0F, false, false, 0x0000)
    );
  }

  #[test]
  fn presets_share_the_ccitt_polynomial() {
    for params in [
      Crc16Params::XMODEM,
      Crc16Params::KERMIT,
      Crc16Params::IBM_3740,
      Crc16Params::SPI_FUJITSU,
    ] {
      assert_eq!(params.poly, 0x1021);
    }
  }
}
