//! I/O adapters for checksum computation.
//!
//! This module re-exports [`ChecksumReader`] and [`ChecksumWriter`], which
//! wrap [`std::io::Read`] and [`std::io::Write`] implementations to compute
//! checksums transparently during I/O operations. Only bytes actually
//! transferred are hashed (short reads and writes are respected).
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use checksum::{ChecksumReader, Crc16Kermit};
//! use traits::Checksum as _;
//!
//! let mut reader = Crc16Kermit::reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), Crc16Kermit::checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
