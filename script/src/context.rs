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

//! Consensus parameters for script handling.

/// Limits and rule switches the script codec is parametrized by.
///
/// The limits are associated constants so they can be resolved statically. The rule switches are
/// methods so that one context type can serve scripts subject to different rules.
pub trait Context {
    /// Maximum size of a script in bytes.
    const MAX_SCRIPT_SIZE: usize = 10_000;

    /// Maximum number of bytes pushed by a single chunk.
    const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

    /// Require data pushes to use the shortest encoding available.
    fn enforce_minimal_push(&self) -> bool {
        true
    }
}

/// Consensus defaults, minimal pushes enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardContext;

impl Context for StandardContext {}

/// Same limits as [StandardContext] but any push encoding is accepted, as found in legacy scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaxedContext;

impl Context for RelaxedContext {
    fn enforce_minimal_push(&self) -> bool {
        false
    }
}
