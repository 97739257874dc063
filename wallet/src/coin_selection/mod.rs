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

//! Policies for picking the outputs to spend in a transaction.

use script::Script;

use crate::Amount;

/// Transaction output owned by the wallet that can be spent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpendableOutput {
    value: Amount,
    lock: Script,
}

impl SpendableOutput {
    pub fn new(value: Amount, lock: Script) -> Self {
        Self { value, lock }
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    /// Script that has to be satisfied to spend the output.
    pub fn lock(&self) -> &Script {
        &self.lock
    }
}

/// Outputs picked by a [CoinSelector] together with their total value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSelection {
    value_gathered: Amount,
    gathered: Vec<SpendableOutput>,
}

impl CoinSelection {
    fn empty() -> Self {
        Self {
            value_gathered: Amount::ZERO,
            gathered: Vec::new(),
        }
    }

    pub fn value_gathered(&self) -> Amount {
        self.value_gathered
    }

    pub fn gathered(&self) -> &[SpendableOutput] {
        &self.gathered
    }

    pub fn into_gathered(self) -> Vec<SpendableOutput> {
        self.gathered
    }

    pub fn is_empty(&self) -> bool {
        self.gathered.is_empty()
    }
}

#[derive(thiserror::Error, Debug, Eq, PartialEq, Clone)]
pub enum CoinSelectorError {
    #[error("Amount arithmetic error")]
    AmountArithmeticError,
}

/// Picks outputs to spend from the outputs available, according to some policy.
///
/// The selection may gather less than the target if the candidates are insufficient, it is up to
/// the caller to check [CoinSelection::value_gathered]. The selector is free to reorder the
/// candidates. Selected outputs are moved out of the candidate list into the selection, the
/// outputs left in the list were not selected.
pub trait CoinSelector {
    fn select(
        &self,
        target: Amount,
        candidates: &mut Vec<SpendableOutput>,
    ) -> Result<CoinSelection, CoinSelectorError>;
}

/// Spend the largest outputs first until the target is reached.
///
/// Outputs of equal value are ordered by their lock script so the selection is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCoinSelector;

impl CoinSelector for DefaultCoinSelector {
    fn select(
        &self,
        target: Amount,
        candidates: &mut Vec<SpendableOutput>,
    ) -> Result<CoinSelection, CoinSelectorError> {
        if target == Amount::ZERO {
            return Ok(CoinSelection::empty());
        }

        candidates.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.lock.cmp(&b.lock)));

        let mut value_gathered = Amount::ZERO;
        let mut num_selected = 0;
        for output in candidates.iter() {
            if value_gathered >= target {
                break;
            }
            value_gathered = (value_gathered + output.value)
                .ok_or(CoinSelectorError::AmountArithmeticError)?;
            num_selected += 1;
        }

        let selection = CoinSelection {
            value_gathered,
            gathered: candidates.drain(..num_selected).collect(),
        };

        log::debug!(
            "Selected {} outputs worth {} for target {}, {} candidates left",
            selection.gathered.len(),
            selection.value_gathered,
            target,
            candidates.len(),
        );
        Ok(selection)
    }
}

/// Spend all the candidates regardless of the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAllCoinSelector;

impl CoinSelector for SelectAllCoinSelector {
    fn select(
        &self,
        target: Amount,
        candidates: &mut Vec<SpendableOutput>,
    ) -> Result<CoinSelection, CoinSelectorError> {
        let value_gathered = candidates
            .iter()
            .map(SpendableOutput::value)
            .sum::<Option<Amount>>()
            .ok_or(CoinSelectorError::AmountArithmeticError)?;

        let selection = CoinSelection {
            value_gathered,
            gathered: std::mem::take(candidates),
        };

        log::debug!(
            "Selected all {} outputs worth {} for target {}",
            selection.gathered.len(),
            selection.value_gathered,
            target,
        );
        Ok(selection)
    }
}

#[cfg(test)]
mod tests;
