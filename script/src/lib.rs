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

//! Codec for the elements of Bitcoin-style scripts.
//!
//! A script is a sequence of chunks, each being either an operation or a data push. This library
//! provides the canonical byte encoding of a chunk, the check that a data push uses the minimal
//! encoding demanded by consensus rules (BIP62), and equality, hashing and disassembly of chunks.
//! Parsing and assembling whole scripts is provided on top of that, script execution is not.
//!
//! ## Example
//!
//! ```
//! use script::{Builder, ScriptChunk, StandardContext};
//! use script::opcodes::all as opc;
//!
//! let script = Builder::new()
//!         .push_opcode(opc::OP_DUP)
//!         .push_slice(&[0xab; 3])
//!         .into_script()
//!         .unwrap();
//! assert_eq!(script.as_bytes(), &[0x76, 0x03, 0xab, 0xab, 0xab]);
//! assert_eq!(script.to_string(), "DUP PUSHDATA(3)[ababab]");
//!
//! let chunk = ScriptChunk::new(opc::OP_PUSHDATA1, Some(vec![0xab; 3]));
//! assert_eq!(chunk.is_minimal(), Ok(false));
//! assert!(script.check_minimal_pushes(&StandardContext).is_ok());
//! ```

pub mod chunk;
pub mod context;
mod error;
pub mod names;
pub mod opcodes;
pub mod script;
#[cfg(test)]
mod test;

pub use crate::script::{Builder, Chunks, Script};
pub use chunk::{Element, PushWidth, ScriptChunk};
pub use context::{Context, RelaxedContext, StandardContext};
pub use error::{ChunkStateError, Error, Precondition, Result};
pub use names::OpcodeNames;
