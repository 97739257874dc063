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

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(rand::thread_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed({})", self.0)
    }
}

/// Makes PRNG that should be used in unit tests to get deterministic values from non-deterministic seed.
///
/// Tests take the seed as an `rstest` case marked with `#[trace]`, so a failing case prints
/// the seed, e.g. `seed = Seed(4862969352335513650)`. The failure can then be reproduced by
/// adding a case with that value:
///
/// ```
/// use rand::Rng;
/// use test_utils::random::{make_seedable_rng, Seed};
///
/// let mut rng = make_seedable_rng(Seed::from_u64(4862969352335513650));
/// let _: u64 = rng.gen();
/// ```
#[must_use]
pub fn make_seedable_rng(seed: Seed) -> impl Rng {
    ChaChaRng::seed_from_u64(seed.0)
}
