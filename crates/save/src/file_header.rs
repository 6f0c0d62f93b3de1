// ---------------------------------------------------------------------------
// file_header – Store file header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (16 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "CRZY"
//   [4..8]   Store format version (u32)
//   [8..12]  Payload length in bytes (u32)
//   [12..16] xxHash32 checksum of the payload
//
// On write: encode entries -> prepend header
// On read:  check magic -> check version -> check length and checksum

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a Crazy Road store file.
pub const MAGIC: [u8; 4] = *b"CRZY";

pub const HEADER_SIZE: usize = 16;

/// Bumped whenever the encoded payload layout changes.
pub const STORE_FORMAT_VERSION: u32 = 1;

const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub payload_len: u32,
    pub checksum: u32,
}

impl FileHeader {
    pub fn new(payload: &[u8]) -> Self {
        Self {
            format_version: STORE_FORMAT_VERSION,
            payload_len: payload.len() as u32,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    fn read(bytes: &[u8]) -> Self {
        let word = |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Self {
            format_version: word(4),
            payload_len: word(8),
            checksum: word(12),
        }
    }
}

/// Returns `[header] ++ [payload]`.
pub fn wrap_with_header(payload: &[u8]) -> Vec<u8> {
    let header = FileHeader::new(payload);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.payload_len.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Validate the header and return the payload that follows it.
///
/// # Errors
///
/// - [`SaveError::Corrupt`] when the magic bytes are missing, the file is
///   truncated, or the checksum does not match.
/// - [`SaveError::VersionMismatch`] when a newer build wrote the file.
pub fn unwrap_header(bytes: &[u8]) -> Result<&[u8], SaveError> {
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Corrupt(format!(
            "file is {} bytes, need at least {HEADER_SIZE} for the header",
            bytes.len()
        )));
    }
    if bytes[..4] != MAGIC {
        return Err(SaveError::Corrupt("missing CRZY magic bytes".to_string()));
    }

    let header = FileHeader::read(bytes);
    if header.format_version > STORE_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: STORE_FORMAT_VERSION,
            found: header.format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != header.payload_len as usize {
        return Err(SaveError::Corrupt(format!(
            "payload is {} bytes, header says {}",
            payload.len(),
            header.payload_len
        )));
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != header.checksum {
        return Err(SaveError::Corrupt(format!(
            "checksum mismatch (expected {:#010X}, got {:#010X})",
            header.checksum, computed
        )));
    }

    Ok(payload)
}
