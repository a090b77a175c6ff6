//! Streaming checksum trait.
//!
//! The interface for checksum algorithms maintained as a small running
//! register: incremental updates, an idempotent snapshot read, and reuse
//! via reset.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc16Xmodem};
///
/// // One-shot (when all data is in memory)
/// let crc = Crc16Xmodem::checksum(b"123456789");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc16Xmodem::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and side-effect-free: it may be called
///   repeatedly and interleaved with further `update` calls
/// - `update` must be chunking-invariant: any split of a byte sequence
///   across calls yields the same final checksum as a single call
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-16: 2
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// `u16` for CRC-16.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that resumes from a previously finalized checksum.
  ///
  /// Feeding the remainder of a message to the returned hasher yields the
  /// same checksum as processing the whole message in one pass.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This is a snapshot read: it does not consume or mutate the hasher, so
  /// further updates may follow (the next snapshot then covers all data
  /// processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc16Kermit;
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc16Kermit::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:04x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::Crc16Kermit;
  /// use std::fs::File;
  ///
  /// let file = File::create("output.bin")?;
  /// let mut writer = Crc16Kermit::writer(file);
  /// writer.write_all(b"hello world")?;
  /// let (file, crc) = writer.into_parts();
  /// println!("CRC: {:04x}", crc);
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}
