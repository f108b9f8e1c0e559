//! # fuzzgate wire format
//!
//! This crate implements the fixed binary layout of a fuzzgate command frame
//! and the three validation gates every frame passes before dispatch.
//!
//! ## Layout
//!
//! | Offset | Field         | Size           |
//! |--------|---------------|----------------|
//! | 0      | Magic "FUZZ"  | 4 bytes        |
//! | 4      | Checksum      | 1 byte         |
//! | 5      | Length        | 1 byte         |
//! | 6      | Command token | `length` bytes |
//!
//! The checksum is the XOR-fold of every byte from offset 5 to the end of the
//! input.
//!
//! ## Gates
//!
//! 1. [`Frame::validate`]: magic marker
//! 2. [`checksum::verify`]: XOR checksum
//! 3. [`field::extract`]: length framing
//!
//! Each gate is a pure function over borrowed input. Each one narrows what
//! the next may assume, and each one fails with its own [`ProtocolError`]
//! variant. A fuzzer reaches every gate with a few bytes of entropy: four
//! for the marker, one for the checksum, one for the length.
//!
//! ## Security Properties
//!
//! - **No Over-Reads**: every slice is taken with `get`, so a lying length
//!   byte produces [`ProtocolError::FieldTruncated`], never a panic.
//! - **Zero-Copy**: the header is cast with [`zerocopy`] and the token is a
//!   borrowed slice of the input.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checksum;
pub mod errors;
pub mod field;
pub mod frame;
pub mod header;

pub use checksum::ChecksumResult;
pub use errors::{ProtocolError, Result};
pub use field::CommandField;
pub use frame::Frame;
pub use header::FrameHeader;
