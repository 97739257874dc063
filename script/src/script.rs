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

//! Script container: parsing into chunks and assembling from chunks.

use std::fmt;

use crate::{
    chunk::ScriptChunk,
    context::{Context, RelaxedContext},
    error::{ChunkStateError, Error},
    names::OpcodeNames,
    opcodes::all::*,
};

/// Serialized script.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a sequence of chunks into a script under consensus limits.
    pub fn from_chunks<'a>(chunks: impl IntoIterator<Item = &'a ScriptChunk>) -> crate::Result<Self> {
        let mut bytes = Vec::new();
        for chunk in chunks {
            chunk.encode_to(&mut bytes)?;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the chunks of the script, accepting any push encoding.
    pub fn chunks(&self) -> Chunks<'_> {
        self.chunks_with(&RelaxedContext)
    }

    /// Iterate over the chunks of the script, applying the push rules of given context.
    pub fn chunks_with<Ctx: Context>(&self, ctx: &Ctx) -> Chunks<'_> {
        Chunks {
            bytes: &self.0,
            pos: 0,
            enforce_minimal_push: ctx.enforce_minimal_push(),
            max_element_size: Ctx::MAX_SCRIPT_ELEMENT_SIZE,
            done: false,
        }
    }

    /// Check the script size and, if the context asks for it, that all pushes are minimal.
    pub fn check_minimal_pushes<Ctx: Context>(&self, ctx: &Ctx) -> crate::Result<()> {
        if self.len() > Ctx::MAX_SCRIPT_SIZE {
            return Err(Error::ScriptSize);
        }
        self.chunks_with(ctx).try_for_each(|chunk| chunk.map(|_| ()))
    }

    /// Space separated disassembly of the script using given name table.
    pub fn to_asm(&self, names: &OpcodeNames) -> String {
        let mut parts = Vec::new();
        for chunk in self.chunks() {
            match chunk {
                Ok(chunk) => parts.push(chunk.to_display_string(names)),
                Err(_) => {
                    parts.push("[error]".to_owned());
                    break;
                }
            }
        }
        parts.join(" ")
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_asm(OpcodeNames::standard()))
    }
}

/// Iterator over chunks of a script.
///
/// Each chunk records the offset it starts at. The iterator stops after the first error.
/// Four byte length pushes are bounded by the element size of the context, so every chunk
/// yielded can be encoded again under that context.
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    bytes: &'a [u8],
    pos: usize,
    enforce_minimal_push: bool,
    max_element_size: usize,
    done: bool,
}

impl<'a> Chunks<'a> {
    /// Read `n` bytes following the current position.
    fn take(&mut self, n: usize, start: usize) -> crate::Result<&'a [u8]> {
        let bytes: &'a [u8] = self.bytes;
        let end = self.pos.checked_add(n).filter(|end| *end <= bytes.len()).ok_or_else(|| {
            log::trace!("Script truncated in push at offset {start}");
            Error::TruncatedPush { offset: start }
        })?;
        let data = &bytes[self.pos..end];
        self.pos = end;
        Ok(data)
    }

    fn take_len(&mut self, width: usize, start: usize) -> crate::Result<usize> {
        let mut len_bytes = [0u8; 4];
        len_bytes[..width].copy_from_slice(self.take(width, start)?);
        Ok(u32::from_le_bytes(len_bytes) as usize)
    }

    fn read_chunk(&mut self) -> crate::Result<ScriptChunk> {
        let start = self.pos;
        let code = self.bytes[start];
        self.pos += 1;

        let len = match code {
            code if code < OP_PUSHDATA1 => code as usize,
            OP_PUSHDATA1 => self.take_len(1, start)?,
            OP_PUSHDATA2 => self.take_len(2, start)?,
            OP_PUSHDATA4 => {
                let len = self.take_len(4, start)?;
                let max = self.max_element_size;
                if len > max {
                    return Err(ChunkStateError::PushTooLong { code, len, max }.into());
                }
                len
            }
            code => return Ok(ScriptChunk::new_at(code, None, start)),
        };
        let data = self.take(len, start)?.to_vec();
        let chunk = ScriptChunk::new_at(code, Some(data), start);

        if self.enforce_minimal_push && !chunk.is_minimal()? {
            return Err(Error::NonMinimalPush { offset: start });
        }
        Ok(chunk)
    }
}

impl Iterator for Chunks<'_> {
    type Item = crate::Result<ScriptChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.bytes.len() {
            return None;
        }
        let result = self.read_chunk();
        self.done = result.is_err();
        Some(result)
    }
}

/// Encode an integer the way script arithmetic reads it: little endian, sign-magnitude, minimal.
pub fn build_scriptint(num: i64) -> Vec<u8> {
    if num == 0 {
        return Vec::new();
    }

    let neg = num < 0;
    let mut abs = num.unsigned_abs();
    let mut bytes = Vec::with_capacity(9);
    while abs > 0 {
        bytes.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit is the sign, add a byte if the magnitude already uses it.
    match bytes.last_mut() {
        Some(last) if *last & 0x80 != 0 => bytes.push(if neg { 0x80 } else { 0x00 }),
        Some(last) if neg => *last |= 0x80,
        _ => (),
    }
    bytes
}

/// Script assembler.
///
/// Collects chunks and encodes them into a [Script]. Pushes added through the builder always use
/// the minimal encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Builder(Vec<ScriptChunk>);

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_opcode(self, code: u8) -> Self {
        self.push_chunk(ScriptChunk::new(code, None))
    }

    pub fn push_slice(self, data: &[u8]) -> Self {
        self.push_chunk(ScriptChunk::push_slice(data))
    }

    pub fn push_int(self, num: i64) -> Self {
        match i8::try_from(num).ok().and_then(ScriptChunk::small_num) {
            Some(chunk) => self.push_chunk(chunk),
            None => self.push_slice(&build_scriptint(num)),
        }
    }

    pub fn push_chunk(mut self, chunk: ScriptChunk) -> Self {
        self.0.push(chunk);
        self
    }

    pub fn chunks(&self) -> &[ScriptChunk] {
        &self.0
    }

    pub fn into_script(self) -> crate::Result<Script> {
        Script::from_chunks(&self.0)
    }
}
