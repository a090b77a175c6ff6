//! Internal macros for CRC-16 variant generation.
//!
//! The catalogue presets share identical structure and differ only in their
//! parameter set; this macro eliminates the per-variant boilerplate.

/// Generate a CRC-16 variant type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: u16`
/// - The `PARAMS` associated const binding the catalogue parameter set
/// - `new()`, `resume()`, `checksum()`, `update()`, `finalize()`, `reset()`
/// - `Default` and `Checksum` implementations
/// - A `std::io::Write` implementation (with the `std` feature)
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Xmodem`)
/// - `$params`: The parameter const (e.g., `Crc16Params::XMODEM`)
macro_rules! define_crc16_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      /// Current raw register state.
      state: u16,
    }

    impl $name {
      /// Catalogue parameter set for this variant.
      pub const PARAMS: $crate::crc16::Crc16Params = $params;

      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self {
          state: Self::PARAMS.init,
        }
      }

      /// Create a hasher that will resume from a previous CRC.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u16) -> Self {
        Self {
          state: $crate::crc16::resume_state(Self::PARAMS, crc),
        }
      }

      /// Compute the checksum of `data` in one shot.
      #[inline]
      #[must_use]
      pub const fn checksum(data: &[u8]) -> u16 {
        $crate::crc16::crc16_finalize(
          Self::PARAMS,
          $crate::crc16::crc16_bitwise(Self::PARAMS, Self::PARAMS.init, data),
        )
      }

      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.state = $crate::crc16::crc16_bitwise(Self::PARAMS, self.state, data);
      }

      /// Snapshot the current checksum without consuming the hasher.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> u16 {
        $crate::crc16::crc16_finalize(Self::PARAMS, self.state)
      }

      #[inline]
      pub fn reset(&mut self) {
        self.state = Self::PARAMS.init;
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = 2;
      type Output = u16;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: u16) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> u16 {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      #[inline]
      fn checksum(data: &[u8]) -> u16 {
        $name::checksum(data)
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
