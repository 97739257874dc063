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

use rand::Rng;
use rstest::rstest;
use script::{opcodes::all::*, Builder, Script};
use test_utils::{
    random::{make_seedable_rng, Seed},
    split_value,
};

use super::*;

fn lock(tag: u8) -> Script {
    Builder::new()
        .push_opcode(OP_DUP)
        .push_slice(&[tag; 20])
        .push_opcode(OP_CHECKSIG)
        .into_script()
        .expect("valid script")
}

fn output(atoms: u128, tag: u8) -> SpendableOutput {
    SpendableOutput::new(Amount::from_atoms(atoms), lock(tag))
}

fn atoms(outputs: &[SpendableOutput]) -> Vec<u128> {
    outputs.iter().map(|o| o.value().into_atoms()).collect()
}

#[test]
fn largest_first_until_target() {
    let mut candidates = vec![output(5, 1), output(30, 2), output(10, 3), output(20, 4)];

    let selection = DefaultCoinSelector.select(Amount::from_atoms(45), &mut candidates).unwrap();

    assert_eq!(atoms(selection.gathered()), vec![30, 20]);
    assert_eq!(selection.value_gathered(), Amount::from_atoms(50));
    assert_eq!(atoms(&candidates), vec![10, 5]);
}

#[test]
fn exact_target() {
    let mut candidates = vec![output(10, 1), output(20, 2)];

    let selection = DefaultCoinSelector.select(Amount::from_atoms(20), &mut candidates).unwrap();

    assert_eq!(atoms(selection.gathered()), vec![20]);
    assert_eq!(atoms(&candidates), vec![10]);
}

#[test]
fn insufficient_candidates() {
    let mut candidates = vec![output(3, 1), output(4, 2)];

    let selection = DefaultCoinSelector.select(Amount::from_atoms(100), &mut candidates).unwrap();

    assert_eq!(selection.value_gathered(), Amount::from_atoms(7));
    assert_eq!(selection.gathered().len(), 2);
    assert!(candidates.is_empty());
}

#[test]
fn zero_target_selects_nothing() {
    let mut candidates = vec![output(3, 1), output(4, 2)];

    let selection = DefaultCoinSelector.select(Amount::ZERO, &mut candidates).unwrap();

    assert!(selection.is_empty());
    assert_eq!(selection.value_gathered(), Amount::ZERO);
    assert_eq!(candidates.len(), 2);
}

#[test]
fn no_candidates() {
    let mut candidates = Vec::new();
    let selection = DefaultCoinSelector.select(Amount::from_atoms(1), &mut candidates).unwrap();
    assert!(selection.is_empty());
}

#[test]
fn equal_values_ordered_by_lock() {
    let mut candidates = vec![output(10, 9), output(10, 2), output(10, 5)];

    let selection = DefaultCoinSelector.select(Amount::from_atoms(15), &mut candidates).unwrap();

    let locks: Vec<_> = selection.gathered().iter().map(|o| o.lock().clone()).collect();
    assert_eq!(locks, vec![lock(2), lock(5)]);
    assert_eq!(candidates, vec![output(10, 9)]);
}

#[test]
fn overflow_is_reported() {
    let mut candidates = vec![output(u128::MAX, 1), output(u128::MAX, 2)];

    assert_eq!(
        SelectAllCoinSelector.select(Amount::from_atoms(1), &mut candidates),
        Err(CoinSelectorError::AmountArithmeticError)
    );
    assert_eq!(candidates.len(), 2);

    // The first output alone reaches the target, the second is never added
    let selection = DefaultCoinSelector.select(Amount::MAX, &mut candidates).unwrap();
    assert_eq!(selection.value_gathered(), Amount::MAX);
    assert_eq!(candidates.len(), 1);
}

#[test]
fn overflow_leaves_candidates_untouched() {
    let mut candidates = vec![output(5, 1), output(u128::MAX - 1, 2)];

    assert_eq!(
        DefaultCoinSelector.select(Amount::MAX, &mut candidates),
        Err(CoinSelectorError::AmountArithmeticError)
    );
    assert_eq!(atoms(&candidates), vec![u128::MAX - 1, 5]);
}

#[test]
fn select_all_ignores_target() {
    let mut candidates = vec![output(1, 1), output(2, 2), output(3, 3)];

    let selection = SelectAllCoinSelector.select(Amount::from_atoms(1), &mut candidates).unwrap();

    assert_eq!(atoms(selection.gathered()), vec![1, 2, 3]);
    assert_eq!(selection.value_gathered(), Amount::from_atoms(6));
    assert!(candidates.is_empty());
}

#[test]
fn selection_is_logged() {
    testing_logger::setup();
    let mut candidates = vec![output(7, 1), output(8, 2)];

    DefaultCoinSelector.select(Amount::from_atoms(5), &mut candidates).unwrap();

    testing_logger::validate(|logs| {
        assert!(logs.iter().any(|entry| entry.level == log::Level::Debug
            && entry.body.contains("Selected 1 outputs worth 8 for target 5")));
    });
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn random_split_covers_target(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let total = rng.gen_range(1..1_000_000u128);
    let mut candidates: Vec<_> = split_value(&mut rng, total)
        .into_iter()
        .map(|value| output(value, rng.gen()))
        .collect();
    let num_candidates = candidates.len();
    let target = Amount::from_atoms(rng.gen_range(1..=total));

    let selection = DefaultCoinSelector.select(target, &mut candidates).unwrap();

    assert!(selection.value_gathered() >= target);
    assert_eq!(selection.gathered().len() + candidates.len(), num_candidates);

    // Dropping the smallest selected output falls short of the target
    let smallest = selection.gathered().last().unwrap().value();
    assert!((selection.value_gathered() - smallest).unwrap() < target);

    // Everything left over is no bigger than what was selected
    if let Some(largest_left) = candidates.iter().map(SpendableOutput::value).max() {
        assert!(largest_left <= smallest);
    }

    let rest = SelectAllCoinSelector.select(target, &mut candidates).unwrap();
    assert_eq!(
        selection.value_gathered() + rest.value_gathered(),
        Some(Amount::from_atoms(total))
    );
}
