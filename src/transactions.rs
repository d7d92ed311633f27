//! Mock transaction rows for the card detail screen.
//!
//! Rows are display-only and ephemeral: the detail screen draws a fresh set
//! every time it appears, so repeated visits show different amounts. That is
//! expected behavior, not a bug.

use std::ops::RangeInclusive;

use rand::Rng;

/// Rows shown on the detail screen.
pub const HISTORY_LEN: usize = 5;

/// Closed range the display amounts are drawn from.
pub const AMOUNT_RANGE: RangeInclusive<u32> = 5..=100;

/// One synthetic history line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub index: usize,
    pub amount: u32,
}

impl TransactionRow {
    pub fn label(&self) -> String {
        format!("Compra #{}", self.index + 1)
    }

    pub fn amount_text(&self) -> String {
        format!("-{} €", self.amount)
    }
}

/// Source of mock amounts.
///
/// The app injects [`RandomAmounts`]; tests inject [`FixedAmounts`] to get a
/// deterministic history.
pub trait TransactionGenerator {
    fn amount(&mut self) -> u32;
}

/// Uniform draw from [`AMOUNT_RANGE`].
pub struct RandomAmounts;

impl TransactionGenerator for RandomAmounts {
    fn amount(&mut self) -> u32 {
        rand::thread_rng().gen_range(AMOUNT_RANGE)
    }
}

/// Fixed sequence for tests; cycles when exhausted.
pub struct FixedAmounts {
    values: Vec<u32>,
    next: usize,
}

impl FixedAmounts {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty());
        Self { values, next: 0 }
    }
}

impl TransactionGenerator for FixedAmounts {
    fn amount(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Draw a fresh [`HISTORY_LEN`]-row history, indices in order.
pub fn generate_history(generator: &mut dyn TransactionGenerator) -> Vec<TransactionRow> {
    (0..HISTORY_LEN)
        .map(|index| TransactionRow {
            index,
            amount: generator.amount(),
        })
        .collect()
}
