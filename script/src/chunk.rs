// Copyright (c) 2021-2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Script chunks: a single operation or data push.

use std::fmt;

use parity_scale_codec::Output;

use crate::{
    context::{Context, StandardContext},
    error::{ChunkStateError, Error, Precondition},
    names::OpcodeNames,
    opcodes::{self, all::*},
};

/// Width of the explicit length prefix of a data push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushWidth {
    /// [OP_PUSHDATA1], one length byte.
    One,
    /// [OP_PUSHDATA2], two length bytes.
    Two,
    /// [OP_PUSHDATA4], four length bytes.
    Four,
}

impl PushWidth {
    pub fn from_opcode(code: u8) -> Option<Self> {
        match code {
            OP_PUSHDATA1 => Some(Self::One),
            OP_PUSHDATA2 => Some(Self::Two),
            OP_PUSHDATA4 => Some(Self::Four),
            _ => None,
        }
    }

    pub const fn opcode(self) -> u8 {
        match self {
            Self::One => OP_PUSHDATA1,
            Self::Two => OP_PUSHDATA2,
            Self::Four => OP_PUSHDATA4,
        }
    }

    /// Number of bytes the length prefix takes.
    pub const fn prefix_len(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Maximum payload length pushable with this width.
    pub fn max_len<Ctx: Context>(self) -> usize {
        match self {
            Self::One => u8::MAX as usize,
            Self::Two => u16::MAX as usize,
            Self::Four => Ctx::MAX_SCRIPT_ELEMENT_SIZE,
        }
    }
}

/// Classified view of a chunk.
///
/// The raw opcode ranges overlap in meaning (e.g. [OP_1] is numerically an operation but pushes
/// a number), so all encoding decisions are made on this view rather than on the opcode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    /// Operation without payload.
    Operation(u8),
    /// Push of up to 75 bytes, the opcode being the payload length.
    DirectPush(&'a [u8]),
    /// Push with an explicit length prefix.
    LengthPrefixedPush { width: PushWidth, data: &'a [u8] },
    /// Push of a small number (or empty array) encoded in the opcode itself.
    SmallNumber(i8),
}

/// An element of a script: either an opcode or a data push.
///
/// Chunks are immutable. The ones obtained by parsing a script remember the offset they started
/// at, the ones created programmatically do not.
///
/// Equality and hashing take the source offset into account, so the same chunk parsed from two
/// different positions compares unequal. Use [ScriptChunk::eq_ignoring_offset] to compare the
/// content only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptChunk {
    code: u8,
    payload: Option<Vec<u8>>,
    source_offset: Option<usize>,
}

impl ScriptChunk {
    /// Create a chunk from raw parts.
    ///
    /// No consistency checks are done here. A chunk whose opcode and payload do not agree can
    /// be constructed but will fail to encode.
    pub fn new(code: u8, payload: Option<Vec<u8>>) -> Self {
        Self {
            code,
            payload,
            source_offset: None,
        }
    }

    /// Create a chunk that was found at given offset of a script.
    pub fn new_at(code: u8, payload: Option<Vec<u8>>, source_offset: usize) -> Self {
        Self {
            code,
            payload,
            source_offset: Some(source_offset),
        }
    }

    /// Operation chunk. Fails for opcodes that require a payload.
    pub fn op(code: u8) -> crate::Result<Self> {
        let chunk = Self::new(code, None);
        chunk.element()?;
        Ok(chunk)
    }

    /// Chunk pushing a number in the range -1 to 16 without a payload.
    ///
    /// Zero is represented as an empty push, the same way the parser produces it.
    pub fn small_num(num: i8) -> Option<Self> {
        match opcodes::encode_small_num(num)? {
            OP_0 => Some(Self::new(OP_0, Some(Vec::new()))),
            code => Some(Self::new(code, None)),
        }
    }

    /// Chunk pushing given data using the shortest encoding.
    pub fn push_slice(data: &[u8]) -> Self {
        match minimal_push_opcode(data) {
            code @ (OP_1NEGATE | OP_1..=OP_16) => Self::new(code, None),
            code => Self::new(code, Some(data.to_vec())),
        }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn equals_opcode(&self, code: u8) -> bool {
        self.code == code
    }

    /// Offset of the chunk in the script it was parsed from.
    pub fn source_offset(&self) -> crate::Result<usize> {
        self.source_offset.ok_or(Precondition::SourceOffsetUnset.into())
    }

    /// The opcode lies above the push data range. Small number pushes other than [OP_0]
    /// satisfy this as well as [Self::is_push_data].
    pub fn is_opcode(&self) -> bool {
        self.code > OP_PUSHDATA4
    }

    /// The chunk pushes data, including the pushes of small numbers.
    pub fn is_push_data(&self) -> bool {
        self.code <= OP_16
    }

    /// Compare chunks by content, disregarding where they were parsed from.
    pub fn eq_ignoring_offset(&self, other: &Self) -> bool {
        self.code == other.code && self.payload == other.payload
    }

    /// Classify the chunk, checking the opcode and payload are consistent.
    pub fn element(&self) -> crate::Result<Element<'_>> {
        let code = self.code;
        match self.payload.as_deref() {
            Some(_) if self.is_opcode() => {
                Err(ChunkStateError::PayloadOnOperation { code }.into())
            }
            None if self.is_opcode() => Ok(opcodes::decode_small_num(code)
                .map_or(Element::Operation(code), Element::SmallNumber)),
            None if code == OP_0 => Ok(Element::SmallNumber(0)),
            None => Err(ChunkStateError::MissingPayload { code }.into()),
            Some(data) if code < OP_PUSHDATA1 => {
                if data.len() == code as usize {
                    Ok(Element::DirectPush(data))
                } else {
                    let len = data.len();
                    Err(ChunkStateError::DirectLengthMismatch { code, len }.into())
                }
            }
            Some(data) => match PushWidth::from_opcode(code) {
                Some(width) => Ok(Element::LengthPrefixedPush { width, data }),
                None => Err(Error::UnsupportedEncoding(code)),
            },
        }
    }

    /// Classify the chunk and check the payload fits the limits of given context.
    fn checked_element<Ctx: Context>(&self) -> crate::Result<Element<'_>> {
        let element = self.element()?;
        if let Element::LengthPrefixedPush { width, data } = element {
            let max = width.max_len::<Ctx>();
            if data.len() > max {
                let (code, len) = (self.code, data.len());
                return Err(ChunkStateError::PushTooLong { code, len, max }.into());
            }
        }
        Ok(element)
    }

    /// Number of bytes the encoded chunk takes.
    pub fn encoded_len(&self) -> crate::Result<usize> {
        Ok(match self.element()? {
            Element::Operation(_) | Element::SmallNumber(_) => 1,
            Element::DirectPush(data) => 1 + data.len(),
            Element::LengthPrefixedPush { width, data } => 1 + width.prefix_len() + data.len(),
        })
    }

    /// Encode the chunk into given output using the limits of given context.
    ///
    /// The chunk is fully validated before anything is written, so nothing is written to the
    /// output if an error is returned.
    pub fn encode_with<Ctx: Context, O: Output + ?Sized>(
        &self,
        _ctx: &Ctx,
        dest: &mut O,
    ) -> crate::Result<()> {
        let element = self.checked_element::<Ctx>().inspect_err(|e| {
            log::warn!("Cannot encode script chunk {:#04x}: {e}", self.code);
        })?;

        match element {
            Element::Operation(code) => dest.push_byte(code),
            Element::SmallNumber(_) => dest.push_byte(self.code),
            Element::DirectPush(data) => {
                dest.push_byte(self.code);
                dest.write(data);
            }
            Element::LengthPrefixedPush { width, data } => {
                // Lengths were checked against the width limits above.
                let len = data.len();
                dest.push_byte(width.opcode());
                match width {
                    PushWidth::One => dest.push_byte(len as u8),
                    PushWidth::Two => dest.write(&(len as u16).to_le_bytes()),
                    PushWidth::Four => dest.write(&(len as u32).to_le_bytes()),
                }
                dest.write(data);
            }
        }

        Ok(())
    }

    /// Encode the chunk into given output under consensus limits.
    pub fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) -> crate::Result<()> {
        self.encode_with(&StandardContext, dest)
    }

    /// Encode the chunk under consensus limits.
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len()?);
        self.encode_to(&mut out)?;
        Ok(out)
    }

    /// Check the data push uses the shortest encoding possible (BIP62).
    ///
    /// Only defined for data pushes, see [Self::is_push_data]. A small number push without a
    /// payload is minimal by construction.
    pub fn is_minimal(&self) -> crate::Result<bool> {
        if !self.is_push_data() {
            return Err(Precondition::NotPushData(self.code).into());
        }
        Ok(match self.payload.as_deref() {
            Some(data) => self.code == minimal_push_opcode(data),
            None => opcodes::decode_small_num(self.code).is_some(),
        })
    }

    /// Human readable representation of the chunk using given name table.
    pub fn to_display_string(&self, names: &OpcodeNames) -> String {
        if self.is_opcode() {
            return names.op_name(self.code).into_owned();
        }
        match (&self.payload, opcodes::decode_small_num(self.code)) {
            (Some(data), _) => {
                format!("{}[{}]", names.push_data_name(self.code), hex::encode(data))
            }
            (None, Some(num)) => num.to_string(),
            (None, None) => names.op_name(self.code).into_owned(),
        }
    }
}

impl fmt::Display for ScriptChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string(OpcodeNames::standard()))
    }
}

/// Opcode of the shortest push of given data.
pub fn minimal_push_opcode(data: &[u8]) -> u8 {
    match data {
        [] => OP_0,
        [b @ 0x01..=0x10] => OP_1 + b - 1,
        [0x81] => OP_1NEGATE,
        _ if data.len() <= opcodes::MAX_DIRECT_PUSH_LEN => data.len() as u8,
        _ if data.len() <= u8::MAX as usize => OP_PUSHDATA1,
        _ if data.len() <= u16::MAX as usize => OP_PUSHDATA2,
        // Cannot occur under the consensus element size limit.
        _ => OP_PUSHDATA4,
    }
}
