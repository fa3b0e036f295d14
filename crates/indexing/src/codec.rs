//! # Overview
//!
//! Fixed-order binary codec for [`IndexRecord`]. The layout is the bit-exact
//! contract between the engine and whatever substrate stores the records, so
//! the write and read paths below must stay mirror images of each other.
//!
//! # Layout
//!
//! | # | Field               | Encoding                          |
//! |---|---------------------|-----------------------------------|
//! | 1 | `enabled`           | 1 byte, `0`/`1`                   |
//! | 2 | `priority`          | 4 bytes, big-endian `i32`         |
//! | 3 | `icon_type`         | string, enum name (`FILE`, ...)   |
//! | 4 | `name`              | string                            |
//! | 5 | `icon`              | string                            |
//! | 6 | `pattern`           | string                            |
//! | 7 | `icon_color`        | string, `DEFAULT` when unset      |
//! | 8 | `folder_color`      | string, `DEFAULT` when unset      |
//! | 9 | `folder_icon_color` | string, `DEFAULT` when unset      |
//!
//! Strings are a big-endian `u16` byte length followed by UTF-8 bytes,
//! matching the `DataOutput#writeUTF` framing the layout originated from.
//! Changing anything in this table is a breaking format change and must bump
//! [`INDEX_VERSION`](crate::INDEX_VERSION).

use std::io::{Read, Write};

use associations::{DEFAULT_COLOR, IconType};

use crate::error::IndexError;
use crate::record::IndexRecord;

/// Serializes a record in the fixed field order.
pub fn encode_record(record: &IndexRecord, out: &mut impl Write) -> Result<(), IndexError> {
    write_bool(out, record.enabled)?;
    write_i32(out, record.priority)?;
    write_str(out, record.icon_type.as_str())?;
    write_str(out, &record.name)?;
    write_str(out, &record.icon)?;
    write_str(out, &record.pattern)?;
    write_color(out, record.icon_color.as_deref())?;
    write_color(out, record.folder_color.as_deref())?;
    write_color(out, record.folder_icon_color.as_deref())?;
    Ok(())
}

/// Deserializes a record written by [`encode_record`].
///
/// Color fields holding the `DEFAULT` sentinel come back as unset, so a
/// record round-trips to the exact in-memory form it was built from.
pub fn decode_record(input: &mut impl Read) -> Result<IndexRecord, IndexError> {
    let enabled = read_bool(input)?;
    let priority = read_i32(input)?;
    let icon_type_token = read_str(input)?;
    let icon_type: IconType = icon_type_token
        .parse()
        .map_err(|()| IndexError::UnknownIconType(icon_type_token))?;
    let name = read_str(input)?;
    let icon = read_str(input)?;
    let pattern = read_str(input)?;
    let icon_color = read_color(input)?;
    let folder_color = read_color(input)?;
    let folder_icon_color = read_color(input)?;

    Ok(IndexRecord {
        enabled,
        priority,
        icon_type,
        name,
        icon,
        pattern,
        icon_color,
        folder_color,
        folder_icon_color,
    })
}

fn write_bool(out: &mut impl Write, value: bool) -> Result<(), IndexError> {
    out.write_all(&[u8::from(value)])?;
    Ok(())
}

fn read_bool(input: &mut impl Read) -> Result<bool, IndexError> {
    let mut byte = [0u8; 1];
    input.read_exact(&mut byte)?;
    Ok(byte[0] != 0)
}

fn write_i32(out: &mut impl Write, value: i32) -> Result<(), IndexError> {
    out.write_all(&value.to_be_bytes())?;
    Ok(())
}

fn read_i32(input: &mut impl Read) -> Result<i32, IndexError> {
    let mut bytes = [0u8; 4];
    input.read_exact(&mut bytes)?;
    Ok(i32::from_be_bytes(bytes))
}

fn write_str(out: &mut impl Write, value: &str) -> Result<(), IndexError> {
    let length =
        u16::try_from(value.len()).map_err(|_| IndexError::StringTooLong(value.len()))?;
    out.write_all(&length.to_be_bytes())?;
    out.write_all(value.as_bytes())?;
    Ok(())
}

fn read_str(input: &mut impl Read) -> Result<String, IndexError> {
    let mut length_bytes = [0u8; 2];
    input.read_exact(&mut length_bytes)?;
    let length = usize::from(u16::from_be_bytes(length_bytes));
    let mut bytes = vec![0u8; length];
    input.read_exact(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| IndexError::InvalidUtf8)
}

fn write_color(out: &mut impl Write, color: Option<&str>) -> Result<(), IndexError> {
    write_str(out, color.unwrap_or(DEFAULT_COLOR))
}

fn read_color(input: &mut impl Read) -> Result<Option<String>, IndexError> {
    let value = read_str(input)?;
    Ok(if value == DEFAULT_COLOR {
        None
    } else {
        Some(value)
    })
}
