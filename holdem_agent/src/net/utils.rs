use bincode::config;
use serde::{Serialize, de::DeserializeOwned};
use std::io::{self, Read, Write};

use super::errors::{Result, SerializationError};

/// Maximum allowed message size (1MB) to prevent DoS attacks via unbounded allocation
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

pub fn read_prefixed<T: DeserializeOwned, R: Read>(reader: &mut R) -> Result<T> {
    // Read the size as a u32
    let mut len_bytes = [0; 4];
    reader.read_exact(&mut len_bytes)?;
    let len = u32::from_le_bytes(len_bytes) as usize;

    if len > MAX_MESSAGE_SIZE {
        return Err(SerializationError::MessageTooLarge {
            actual: len,
            max: MAX_MESSAGE_SIZE,
        });
    }

    // A would block error here means the sender doesn't follow the prefix
    // protocol.
    let mut buf = vec![0; len];
    if let Err(error) = reader.read_exact(&mut buf) {
        let kind = match error.kind() {
            io::ErrorKind::WouldBlock => io::ErrorKind::InvalidData,
            error => error,
        };
        return Err(io::Error::from(kind).into());
    }

    let (value, _) = bincode::serde::decode_from_slice(&buf, config::standard())?;
    Ok(value)
}

pub fn write_prefixed<T: Serialize, W: Write>(writer: &mut W, value: &T) -> Result<()> {
    let serialized = bincode::serde::encode_to_vec(value, config::standard())?;
    if serialized.len() > MAX_MESSAGE_SIZE {
        return Err(SerializationError::MessageTooLarge {
            actual: serialized.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }

    // Write the size of the serialized data and the serialized data
    // all in one chunk to prevent read-side EOF race conditions.
    let size = serialized.len() as u32;
    let mut buf = Vec::from(size.to_le_bytes());
    buf.extend(serialized);
    writer.write_all(&buf)?;
    Ok(())
}
