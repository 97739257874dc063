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

pub mod random;

use itertools::Itertools;
use rand::{distributions::uniform::SampleRange, Rng};

/// Random byte string with length drawn from given range.
pub fn random_bytes<R: SampleRange<usize>>(rng: &mut impl Rng, range_len: R) -> Vec<u8> {
    if range_len.is_empty() {
        return Vec::new();
    }
    let len = rng.gen_range(range_len);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Random opcode byte, biased towards the push range boundaries.
pub fn random_opcode(rng: &mut impl Rng) -> u8 {
    const INTERESTING: [u8; 10] = [0x00, 0x01, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x60, 0x61];
    if rng.gen_bool(0.5) {
        INTERESTING[rng.gen_range(0..INTERESTING.len())]
    } else {
        rng.gen()
    }
}

/// Split value into a random number of parts summing up to it. Parts may be zero.
pub fn split_value(rng: &mut impl Rng, value: u128) -> Vec<u128> {
    let mut numbers = vec![0, value];
    let n = rng.gen_range(0..10);

    if value > 1 && n > 0 {
        numbers.extend((0..=n).map(|_| rng.gen_range(1..value)).collect::<Vec<_>>());
        numbers.sort();
    }

    numbers.iter().tuple_windows().map(|(v0, v1)| v1 - v0).collect()
}
