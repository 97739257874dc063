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

use thiserror::Error;

/// Reason a chunk cannot be encoded as it stands.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStateError {
    #[error("Operation {code:#04x} carries a payload")]
    PayloadOnOperation { code: u8 },
    #[error("Direct push opcode {code:#04x} does not match payload length {len}")]
    DirectLengthMismatch { code: u8, len: usize },
    #[error("Push opcode {code:#04x} has no payload")]
    MissingPayload { code: u8 },
    #[error("Payload of {len} bytes too long for opcode {code:#04x} (max {max})")]
    PushTooLong { code: u8, len: usize, max: usize },
}

/// Operation invoked on a chunk it is not defined for.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("Opcode {0:#04x} is not a data push")]
    NotPushData(u8),
    #[error("Chunk was not parsed from a script")]
    SourceOffsetUnset,
}

/// Script error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid chunk state: {0}")]
    InvalidState(#[from] ChunkStateError),

    #[error("No encoding defined for opcode {0:#04x}")]
    UnsupportedEncoding(u8),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(#[from] Precondition),

    #[error("Script ends in the middle of a push starting at offset {offset}")]
    TruncatedPush { offset: usize },

    #[error("Push at offset {offset} is not minimally encoded")]
    NonMinimalPush { offset: usize },

    #[error("Script too large")]
    ScriptSize,
}

pub type Result<T> = core::result::Result<T, Error>;
