//! Ledger summary
//!
//! Totals, balance, savings rate and budget status computed from a set of
//! entries and the monthly budget. Pure: the same inputs always give the same
//! summary.

use crate::models::{Entry, EntryType, Money};

/// Expense-to-budget percentage at which a warning is raised
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Expense-to-budget percentage at which the budget counts as exceeded
pub const EXCEEDED_THRESHOLD_PERCENT: f64 = 100.0;

/// Classification of spending against the monthly budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No budget set; the user should be prompted to define one
    Undefined,
    /// Spending below the warning threshold
    Ok,
    /// Spending at or above 80% of the budget
    Warning { percent_used: f64 },
    /// Spending at or above the budget
    Exceeded { amount_over: Money },
}

impl BudgetStatus {
    /// Classify `expense` against `budget`
    pub fn classify(expense: Money, budget: Money) -> Self {
        if !budget.is_positive() {
            return Self::Undefined;
        }

        let ratio = expense.cents() as f64 * 100.0 / budget.cents() as f64;

        if ratio >= EXCEEDED_THRESHOLD_PERCENT {
            Self::Exceeded {
                amount_over: expense - budget,
            }
        } else if ratio >= WARNING_THRESHOLD_PERCENT {
            Self::Warning { percent_used: ratio }
        } else {
            Self::Ok
        }
    }

    /// Whether the user should see an alert
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Warning { .. } | Self::Exceeded { .. })
    }
}

/// Aggregated view of a ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    /// Always `income - expense`
    pub balance: Money,
    /// Balance as a percentage of income, one decimal place; 0 without income
    pub savings_rate: f64,
    pub budget_status: BudgetStatus,
}

impl Summary {
    /// Compute the summary of `entries` against `budget`
    pub fn compute<'a, I>(entries: I, budget: Money) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for entry in entries {
            match entry.entry_type {
                EntryType::Income => income += entry.amount,
                EntryType::Expense => expense += entry.amount,
            }
        }

        let balance = income - expense;

        Self {
            income,
            expense,
            balance,
            savings_rate: savings_rate(income, balance),
            budget_status: BudgetStatus::classify(expense, budget),
        }
    }
}

/// Compute the summary of `entries` against `budget`
pub fn summarize<'a, I>(entries: I, budget: Money) -> Summary
where
    I: IntoIterator<Item = &'a Entry>,
{
    Summary::compute(entries, budget)
}

fn savings_rate(income: Money, balance: Money) -> f64 {
    if !income.is_positive() {
        return 0.0;
    }
    let rate = balance.cents() as f64 * 100.0 / income.cents() as f64;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;

    fn entry(entry_type: EntryType, amount: f64, category: &str) -> Entry {
        EntryDraft::new(entry_type, "x", category, amount, "2025-01-15")
            .into_entry()
            .unwrap()
    }

    fn scenario() -> Vec<Entry> {
        vec![
            entry(EntryType::Income, 1000.0, "Salario"),
            entry(EntryType::Expense, 600.0, "Comida"),
            entry(EntryType::Expense, 200.0, "Ocio"),
        ]
    }

    #[test]
    fn test_scenario_hits_warning() {
        let summary = summarize(&scenario(), Money::from_units(1000));

        assert_eq!(summary.income, Money::from_units(1000));
        assert_eq!(summary.expense, Money::from_units(800));
        assert_eq!(summary.balance, Money::from_units(200));
        assert_eq!(summary.savings_rate, 20.0);
        assert_eq!(
            summary.budget_status,
            BudgetStatus::Warning { percent_used: 80.0 }
        );
    }

    #[test]
    fn test_deterministic() {
        let entries = scenario();
        let budget = Money::from_units(900);
        assert_eq!(summarize(&entries, budget), summarize(&entries, budget));
    }

    #[test]
    fn test_balance_invariant() {
        let entries = vec![
            entry(EntryType::Income, 10.25, "a"),
            entry(EntryType::Expense, 99.99, "b"),
            entry(EntryType::Income, 0.01, "a"),
        ];
        for n in 0..=entries.len() {
            let s = summarize(&entries[..n], Money::zero());
            assert_eq!(s.balance, s.income - s.expense);
        }
    }

    #[test]
    fn test_zero_budget_is_undefined() {
        let summary = summarize(&scenario(), Money::zero());
        assert_eq!(summary.budget_status, BudgetStatus::Undefined);
        assert!(!summary.budget_status.is_alert());
    }

    #[test]
    fn test_expense_equal_to_budget_is_exceeded_by_zero() {
        assert_eq!(
            BudgetStatus::classify(Money::from_units(800), Money::from_units(800)),
            BudgetStatus::Exceeded {
                amount_over: Money::zero()
            }
        );
    }

    #[test]
    fn test_status_bands() {
        let budget = Money::from_units(1000);
        assert_eq!(BudgetStatus::classify(Money::from_cents(79_999), budget), BudgetStatus::Ok);
        assert_eq!(
            BudgetStatus::classify(Money::from_units(950), budget),
            BudgetStatus::Warning { percent_used: 95.0 }
        );
        assert_eq!(
            BudgetStatus::classify(Money::from_units(1250), budget),
            BudgetStatus::Exceeded {
                amount_over: Money::from_units(250)
            }
        );
    }

    #[test]
    fn test_savings_rate_without_income() {
        let entries = vec![entry(EntryType::Expense, 50.0, "Ocio")];
        let summary = summarize(&entries, Money::zero());
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.balance, Money::from_units(-50));
    }

    #[test]
    fn test_savings_rate_rounds_to_one_decimal() {
        let entries = vec![
            entry(EntryType::Income, 3.0, "a"),
            entry(EntryType::Expense, 1.0, "b"),
        ];
        assert_eq!(summarize(&entries, Money::zero()).savings_rate, 66.7);
    }

    #[test]
    fn test_large_ledger_totals_do_not_overflow() {
        let max = crate::models::money::MAX_DECIMAL;
        let entries: Vec<Entry> = (0..1100)
            .map(|_| entry(EntryType::Expense, max, "Vivienda"))
            .collect();

        let summary = summarize(&entries, Money::from_units(1000));

        let each = Money::from_decimal(max).unwrap().cents();
        assert_eq!(summary.expense, Money::from_cents(each * 1100));
        assert_eq!(summary.balance, -summary.expense);
        assert!(matches!(summary.budget_status, BudgetStatus::Exceeded { .. }));
    }

    #[test]
    fn test_negative_savings_rate() {
        let entries = vec![
            entry(EntryType::Income, 100.0, "a"),
            entry(EntryType::Expense, 150.0, "b"),
        ];
        assert_eq!(summarize(&entries, Money::zero()).savings_rate, -50.0);
    }
}
