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

use std::fmt;

// use only unsigned types
// if you need a signed amount, we should create a separate type for it and implement proper conversion
pub type IntType = u128;

/// Amount of coins in atoms, the smallest unit. Arithmetic is checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    atoms: IntType,
}

impl Amount {
    pub const ZERO: Self = Self { atoms: 0 };
    pub const MAX: Self = Self {
        atoms: IntType::MAX,
    };

    pub const fn from_atoms(atoms: IntType) -> Self {
        Self { atoms }
    }

    pub const fn into_atoms(self) -> IntType {
        self.atoms
    }
}

impl std::ops::Add for Amount {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        self.atoms.checked_add(other.atoms).map(Self::from_atoms)
    }
}

impl std::ops::Sub for Amount {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        self.atoms.checked_sub(other.atoms).map(Self::from_atoms)
    }
}

impl std::iter::Sum<Amount> for Option<Amount> {
    fn sum<I: Iterator<Item = Amount>>(mut iter: I) -> Self {
        iter.try_fold(Amount::ZERO, std::ops::Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.atoms, f)
    }
}
