//! Parameterized bit-serial CRC-16 checksums.
//!
//! This crate implements the CRC-16 family as one algorithm with five
//! catalogue parameters (polynomial, initial value, input reflection,
//! output reflection, output XOR), plus the bit-reflection primitive the
//! reflected variants depend on. The engine is deliberately bit-serial: no
//! lookup tables, no SIMD. Its contract is correctness and catalogue
//! conformance, not throughput.
//!
//! # Supported Variants
//!
//! | Type | Polynomial | Init | RefIn/Out | check("123456789") |
//! |------|------------|------|-----------|--------------------|
//! | [`Crc16Xmodem`] | 0x1021 | 0x0000 | no/no | 0x31C3 |
//! | [`Crc16Kermit`] | 0x1021 | 0x0000 | yes/yes | 0x2189 |
//! | [`Crc16Ibm3740`] | 0x1021 | 0xFFFF | no/no | 0x29B1 |
//! | [`Crc16SpiFujitsu`] | 0x1021 | 0x1D0F | no/no | 0xE5CC |
//!
//! Any other CRC-16 variant from the public catalogue is reachable through
//! [`Crc16Params`] and the runtime [`Crc16`] engine.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc16Xmodem};
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = Crc16Xmodem::checksum(data);
//! assert_eq!(crc, 0x31C3);
//!
//! // Streaming computation: chunking never changes the result
//! let mut hasher = Crc16Xmodem::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod crc16;
pub mod reflect;

#[cfg(feature = "std")]
mod io;

// Re-export public types
pub use crc16::{Crc16, Crc16Ibm3740, Crc16Kermit, Crc16Params, Crc16SpiFujitsu, Crc16Xmodem};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
// Re-export traits for convenience
pub use traits::Checksum;
