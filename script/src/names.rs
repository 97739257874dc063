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

//! Display names of opcodes, used for disassembly.

use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::opcodes;

static STANDARD: Lazy<OpcodeNames> = Lazy::new(|| OpcodeNames::new(opcodes::NAMED.iter().copied()));

/// Immutable lookup table from opcode to its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpcodeNames {
    names: [Option<&'static str>; 256],
}

impl OpcodeNames {
    /// Build a table from `(opcode, name)` pairs. Later entries override earlier ones.
    pub fn new(entries: impl IntoIterator<Item = (u8, &'static str)>) -> Self {
        let mut names = [None; 256];
        for (code, name) in entries {
            names[code as usize] = Some(name);
        }
        Self { names }
    }

    /// The table of standard opcode names, built on first use.
    pub fn standard() -> &'static OpcodeNames {
        &STANDARD
    }

    /// Name registered for given opcode, if any.
    pub fn get(&self, code: u8) -> Option<&'static str> {
        self.names[code as usize]
    }

    /// Name of an operation. Unnamed opcodes render as `NON_OP(n)`.
    pub fn op_name(&self, code: u8) -> Cow<'static, str> {
        self.get(code)
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(format!("NON_OP({code})")))
    }

    /// Name of a push opcode. Direct pushes render as `PUSHDATA(n)`.
    pub fn push_data_name(&self, code: u8) -> Cow<'static, str> {
        self.get(code)
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(format!("PUSHDATA({code})")))
    }
}
