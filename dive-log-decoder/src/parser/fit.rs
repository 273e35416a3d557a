//! FIT container framing
//!
//! Garmin devices store activities as FIT files: a small header, a stream
//! of records and a trailing CRC. Records come in two shapes. A definition
//! record describes the layout of a "local message type" (global message
//! number plus a list of field number/size/base type triples), and data
//! records are laid out according to the last definition for their local
//! type.
//!
//! This module only does the framing. Field meaning is left to a
//! [`FitVisitor`].

use crate::types::{DecoderError, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Size of the file-name fingerprint the download layer prepends
pub const FIT_NAME_SIZE: usize = 24;

/// Maximum number of fields in one definition
pub const MAX_FIELDS: usize = 128;

const MAX_LOCAL_TYPES: usize = 16;

const FIT_MAGIC: &[u8; 4] = b".FIT";

/// FIT base types, as numbered in the low 7 bits of a field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Enum,
    Sint8,
    Uint8,
    Sint16,
    Uint16,
    Sint32,
    Uint32,
    String,
    Float32,
    Float64,
    Uint8z,
    Uint16z,
    Uint32z,
    Byte,
    Sint64,
    Uint64,
    Uint64z,
}

impl BaseType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        let base = match raw & 0x7f {
            0 => BaseType::Enum,
            1 => BaseType::Sint8,
            2 => BaseType::Uint8,
            3 => BaseType::Sint16,
            4 => BaseType::Uint16,
            5 => BaseType::Sint32,
            6 => BaseType::Uint32,
            7 => BaseType::String,
            8 => BaseType::Float32,
            9 => BaseType::Float64,
            10 => BaseType::Uint8z,
            11 => BaseType::Uint16z,
            12 => BaseType::Uint32z,
            13 => BaseType::Byte,
            14 => BaseType::Sint64,
            15 => BaseType::Uint64,
            16 => BaseType::Uint64z,
            _ => return None,
        };
        Some(base)
    }

    /// Size of one element in bytes
    pub fn size(self) -> usize {
        match self {
            BaseType::Enum
            | BaseType::Sint8
            | BaseType::Uint8
            | BaseType::String
            | BaseType::Uint8z
            | BaseType::Byte => 1,
            BaseType::Sint16 | BaseType::Uint16 | BaseType::Uint16z => 2,
            BaseType::Sint32 | BaseType::Uint32 | BaseType::Float32 | BaseType::Uint32z => 4,
            BaseType::Float64 | BaseType::Sint64 | BaseType::Uint64 | BaseType::Uint64z => 8,
        }
    }

    /// Raw value meaning "no data"
    pub fn invalid(self) -> u64 {
        match self {
            BaseType::Enum | BaseType::Uint8 | BaseType::Byte => 0xff,
            BaseType::Sint8 => 0x7f,
            BaseType::Sint16 => 0x7fff,
            BaseType::Uint16 => 0xffff,
            BaseType::Sint32 => 0x7fff_ffff,
            BaseType::Uint32 | BaseType::Float32 => 0xffff_ffff,
            BaseType::Float64 | BaseType::Uint64 => u64::MAX,
            BaseType::Sint64 => 0x7fff_ffff_ffff_ffff,
            BaseType::String
            | BaseType::Uint8z
            | BaseType::Uint16z
            | BaseType::Uint32z
            | BaseType::Uint64z => 0,
        }
    }
}

/// Fixed FIT file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitHeader {
    pub header_size: u8,
    pub protocol: u8,
    pub profile: u16,
    pub data_size: u32,
}

/// One field of a data record
#[derive(Debug, Clone, Copy)]
pub struct FitField<'b> {
    /// Global message number of the enclosing record
    pub message: u16,
    /// Field definition number
    pub number: u8,
    pub base_type: BaseType,
    pub raw: &'b [u8],
}

impl<'b> FitField<'b> {
    /// Read the leading element as `ty` (little-endian)
    ///
    /// Returns `None` for the type's invalid sentinel, or when the field is
    /// too short to hold one element.
    pub fn read(&self, ty: BaseType) -> Option<u64> {
        if ty != self.base_type {
            log::trace!(
                "Message {} field {}: read as {:?}, declared {:?}",
                self.message,
                self.number,
                ty,
                self.base_type
            );
        }

        let bytes = self.raw.get(..ty.size())?;
        let value = match bytes.len() {
            1 => bytes[0] as u64,
            2 => LittleEndian::read_u16(bytes) as u64,
            4 => LittleEndian::read_u32(bytes) as u64,
            _ => LittleEndian::read_u64(bytes),
        };

        if value == ty.invalid() {
            None
        } else {
            Some(value)
        }
    }
}

/// Receives the fields of every data record, in file order
pub trait FitVisitor {
    fn field(&mut self, field: &FitField<'_>);

    /// Called after the last field of each data record
    fn end_record(&mut self) {}
}

#[derive(Debug, Clone, Copy)]
struct FieldDef {
    number: u8,
    size: u8,
    base_type: u8,
}

#[derive(Debug, Clone, Default)]
struct Definition {
    message: u16,
    fields: Vec<FieldDef>,
}

/// A fingerprinted FIT file with a validated header
#[derive(Debug, Clone, Copy)]
pub struct FitFile<'b> {
    pub header: FitHeader,
    records: &'b [u8],
}

fn traversal_error(message: String) -> DecoderError {
    log::error!("{}", message);
    DecoderError::DataFormat(message)
}

impl<'b> FitFile<'b> {
    /// Skip the file-name fingerprint and validate the FIT header
    pub fn parse(data: &'b [u8]) -> Result<Self> {
        let data = data
            .get(FIT_NAME_SIZE..)
            .ok_or_else(|| DecoderError::DataFormat("Missing FIT file name".to_string()))?;

        if data.len() < 12 {
            return Err(DecoderError::DataFormat("Short FIT header".to_string()));
        }

        let header = FitHeader {
            header_size: data[0],
            protocol: data[1],
            profile: LittleEndian::read_u16(&data[2..]),
            data_size: LittleEndian::read_u32(&data[4..]),
        };

        if &data[8..12] != FIT_MAGIC {
            return Err(DecoderError::DataFormat("Missing .FIT signature".to_string()));
        }

        let header_size = header.header_size as usize;
        let data_size = header.data_size as usize;
        if header_size < 12 || data_size + header_size + 2 > data.len() {
            return Err(DecoderError::DataFormat(format!(
                "Invalid FIT sizes: header {}, data {}, file {}",
                header_size,
                data_size,
                data.len()
            )));
        }

        Ok(Self {
            header,
            records: &data[header_size..header_size + data_size],
        })
    }

    /// Walk every record, handing data fields to `visitor`
    ///
    /// Stops at the first malformed record; fields seen before it have
    /// already been delivered.
    pub fn walk(&self, visitor: &mut dyn FitVisitor) -> Result<()> {
        let mut definitions: [Option<Definition>; MAX_LOCAL_TYPES] = Default::default();
        let mut rest = self.records;

        while let Some((&record, body)) = rest.split_first() {
            let len = if record & 0x80 != 0 {
                return Err(traversal_error(format!(
                    "Compressed timestamp record for local type {}",
                    (record >> 5) & 3
                )));
            } else if record & 0x40 != 0 {
                read_definition(body, record, &mut definitions)?
            } else {
                let len = read_data(body, record, &definitions, visitor)?;
                visitor.end_record();
                len
            };

            if len == 0 || len > body.len() {
                return Err(traversal_error(format!("Invalid record length {}", len)));
            }
            rest = &body[len..];
        }

        Ok(())
    }
}

/// Definition record: reserved, architecture, global message (2), field count,
/// then three bytes per field
fn read_definition(
    body: &[u8],
    record: u8,
    definitions: &mut [Option<Definition>; MAX_LOCAL_TYPES],
) -> Result<usize> {
    let local = (record & 0x0f) as usize;

    if body.len() < 5 {
        return Err(traversal_error("Truncated definition record".to_string()));
    }

    let message = LittleEndian::read_u16(&body[2..]);
    let count = body[4] as usize;
    log::debug!(
        "Define local type {}: arch {:02x} message {} fields {}",
        local,
        body[1],
        message,
        count
    );

    if body[1] != 0 {
        return Err(traversal_error(
            "Only little-endian definitions are supported".to_string(),
        ));
    }
    if count > MAX_FIELDS {
        return Err(traversal_error(format!(
            "Too many fields in definition: {} (max {})",
            count, MAX_FIELDS
        )));
    }
    if record & 0x20 != 0 {
        return Err(traversal_error(
            "Developer fields are not supported".to_string(),
        ));
    }

    let len = 5 + count * 3;
    let raw_fields = body
        .get(5..len)
        .ok_or_else(|| traversal_error("Truncated field definitions".to_string()))?;

    let fields = raw_fields
        .chunks_exact(3)
        .map(|f| FieldDef {
            number: f[0],
            size: f[1],
            base_type: f[2],
        })
        .collect();

    definitions[local] = Some(Definition { message, fields });
    Ok(len)
}

fn read_data(
    body: &[u8],
    record: u8,
    definitions: &[Option<Definition>; MAX_LOCAL_TYPES],
    visitor: &mut dyn FitVisitor,
) -> Result<usize> {
    let local = (record & 0x0f) as usize;
    let definition = definitions[local]
        .as_ref()
        .ok_or_else(|| traversal_error(format!("Uninitialized local type {}", local)))?;

    let mut offset = 0;
    for def in &definition.fields {
        let len = def.size as usize;
        let remaining = &body[offset..];

        if len == 0 {
            return Err(traversal_error("Field with zero length".to_string()));
        }
        if remaining.len() < len {
            return Err(traversal_error(format!(
                "Field size bigger than remaining data ({} vs {})",
                len,
                remaining.len()
            )));
        }

        let Some(base_type) = BaseType::from_raw(def.base_type) else {
            log::warn!("Unknown base type {}, skipping field", def.base_type & 0x7f);
            offset += len;
            continue;
        };

        if len % base_type.size() != 0 {
            return Err(traversal_error(format!(
                "Field size not a multiple of base size ({} vs {})",
                len,
                base_type.size()
            )));
        }

        if base_type == BaseType::String {
            let terminated = remaining.iter().position(|&b| b == 0);
            match terminated {
                Some(end) if end < len => {}
                Some(end) => {
                    return Err(traversal_error(format!(
                        "Field length {}, string length {}",
                        len,
                        end + 1
                    )));
                }
                None => {
                    return Err(traversal_error(
                        "String bigger than remaining data".to_string(),
                    ));
                }
            }
        }

        visitor.field(&FitField {
            message: definition.message,
            number: def.number,
            base_type,
            raw: &remaining[..len],
        });
        offset += len;
    }

    Ok(offset)
}
