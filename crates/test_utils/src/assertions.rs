//! Custom Test Assertions
//!
//! Provides assertion helpers for balances and settlement plans that give
//! more meaningful error messages than standard assertions.

use domain_split::{apply_settlements, Balances, Settlement};

/// Asserts that balances sum to exactly zero
pub fn assert_conserved(balances: &Balances) {
    let total = balances.total_minor();
    assert_eq!(
        total, 0,
        "Balances do not sum to zero: total={} cents, balances={:?}",
        total, balances
    );
}

/// Asserts that applying `plan` leaves every balance within tolerance
///
/// Balances are whole cents, so "within tolerance" also means exactly zero;
/// both are checked to keep the failure message specific.
pub fn assert_plan_settles(balances: &Balances, plan: &[Settlement]) {
    let adjusted = match apply_settlements(balances, plan) {
        Ok(adjusted) => adjusted,
        Err(e) => panic!("Applying plan failed: {e}; plan={plan:?}"),
    };
    for (name, balance) in adjusted.iter() {
        assert!(
            balance.is_settled(),
            "{} is left with {} after settlement; plan={:?}",
            name,
            balance.amount(),
            plan
        );
        assert!(
            balance.is_zero(),
            "{} keeps a residue of {} after settlement; plan={:?}",
            name,
            balance.amount(),
            plan
        );
    }
}

/// Asserts the structural guarantees of a settlement plan
///
/// - Every amount is strictly positive and at currency precision
/// - Nobody pays themselves
/// - At most `nonzero - 1` transfers
pub fn assert_plan_well_formed(balances: &Balances, plan: &[Settlement]) {
    for settlement in plan {
        assert!(
            settlement.amount.is_positive(),
            "Non-positive settlement: {:?}",
            settlement
        );
        assert_eq!(
            settlement.amount,
            settlement.amount.round_to_currency(),
            "Settlement not at currency precision: {:?}",
            settlement
        );
        assert_ne!(settlement.from, settlement.to, "Self settlement: {:?}", settlement);
    }

    let bound = balances.nonzero_count().saturating_sub(1);
    assert!(
        plan.len() <= bound,
        "Plan has {} transfers, bound is {}",
        plan.len(),
        bound
    );
}
