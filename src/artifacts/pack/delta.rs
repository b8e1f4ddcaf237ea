//! Delta objects
//!
//! A delta rebuilds an object from a base object. It starts with the sizes of
//! the base and of the result, as little-endian base-128 varints, followed by
//! instructions:
//!
//! ```text
//! 1xxxxxxx  copy: bits 0-3 select offset bytes, bits 4-6 select size bytes
//!           that follow; a size of 0 means 0x10000
//! 0nnnnnnn  insert: the next n (1..=127) bytes are copied from the delta
//! 00000000  reserved
//! ```

use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};

const COPY_FLAG: u8 = 0x80;
const DEFAULT_COPY_SIZE: usize = 0x10000;

/// Apply `delta` to `base` and return the resulting object payload
pub fn apply_delta(base: &[u8], delta: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut reader = Cursor::new(delta);

    let source_size = read_size(&mut reader)?;
    if source_size != base.len() {
        anyhow::bail!(
            "Delta expects a base of {} bytes, got {}",
            source_size,
            base.len()
        );
    }
    let target_size = read_size(&mut reader)?;

    let mut target = Vec::with_capacity(target_size);
    while (reader.position() as usize) < delta.len() {
        let command = reader.read_u8()?;

        if command & COPY_FLAG != 0 {
            let offset = read_packed(&mut reader, command, 4)?;
            let size = match read_packed(&mut reader, command >> 4, 3)? {
                0 => DEFAULT_COPY_SIZE,
                size => size,
            };

            let chunk = offset
                .checked_add(size)
                .and_then(|end| base.get(offset..end))
                .ok_or_else(|| {
                    anyhow::anyhow!("Delta copies {size} bytes at {offset}, past the base")
                })?;
            target.extend_from_slice(chunk);
        } else if command != 0 {
            let start = target.len();
            target.resize(start + command as usize, 0);
            reader
                .read_exact(&mut target[start..])
                .map_err(|_| anyhow::anyhow!("Delta insert runs past the end of the delta"))?;
        } else {
            anyhow::bail!("Invalid delta: reserved instruction 0");
        }
    }

    if target.len() != target_size {
        anyhow::bail!(
            "Delta result is {} bytes, expected {}",
            target.len(),
            target_size
        );
    }

    Ok(target)
}

fn read_size(reader: &mut impl Read) -> anyhow::Result<usize> {
    let mut size = 0usize;
    let mut shift = 0;

    loop {
        let byte = reader.read_u8()?;
        if shift >= usize::BITS {
            anyhow::bail!("Invalid delta: size does not fit in memory");
        }
        size |= usize::from(byte & 0x7f) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            return Ok(size);
        }
    }
}

/// Little-endian integer made of the bytes whose bit is set in `present`
fn read_packed(reader: &mut impl Read, present: u8, width: usize) -> anyhow::Result<usize> {
    let mut value = 0usize;

    for i in 0..width {
        if present & (1 << i) != 0 {
            value |= usize::from(reader.read_u8()?) << (8 * i);
        }
    }

    Ok(value)
}
