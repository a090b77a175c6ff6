//! Low-level bit-manipulation helpers.
//!
//! `bitkit` bundles a parameterized bit-serial CRC-16 engine, the catalogue
//! preset variants, and the bit-reflection primitive they build on. The
//! engine favors auditability over throughput: no lookup tables, no SIMD,
//! just the reference bit-level definition.
//!
//! # Quick Start
//!
//! ```
//! use bitkit::{Checksum, Crc16Xmodem};
//!
//! // One-shot computation
//! let crc = Crc16Xmodem::checksum(b"123456789");
//! assert_eq!(crc, 0x31C3);
//!
//! // Streaming computation
//! let mut hasher = Crc16Xmodem::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! Variants outside the preset set are a parameter record away:
//!
//! ```
//! use bitkit::{Crc16, Crc16Params};
//!
//! // CRC-16/GSM
//! let params = Crc16Params::new(0x1021, 0x0000, false, false, 0xFFFF);
//! assert_eq!(Crc16::checksum(params, b"123456789"), 0xCE3C);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | std::io adapters (`ChecksumReader`/`ChecksumWriter`) |
//!
//! Without `std` the crate is fully `no_std`.
#![cfg_attr(not(feature = "std"), no_std)]

pub use checksum::{Crc16, Crc16Ibm3740, Crc16Kermit, Crc16Params, Crc16SpiFujitsu, Crc16Xmodem, crc16, reflect};
pub use traits::Checksum;
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
