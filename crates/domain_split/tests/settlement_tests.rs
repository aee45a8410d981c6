//! Settlement planning tests for domain_split

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_split::{
    apply_settlements, compute_balances, plan_settlements, BalanceReport, Balances, Settlement,
    SettlementPlanner,
};
use test_utils::{
    assert_plan_settles, assert_plan_well_formed, balances_strategy, group_strategy,
    ExpenseBuilder, GroupFixtures, MoneyFixtures,
};

fn transfer(from: &str, to: &str, amount: Money) -> Settlement {
    Settlement { from: from.to_string(), to: to.to_string(), amount }
}

// ============================================================================
// Worked Groups
// ============================================================================

mod worked_groups {
    use super::*;

    #[test]
    fn test_pair_settles_with_one_transfer() {
        let (participants, expenses) = GroupFixtures::pair();
        let report = BalanceReport::compute(&participants, &expenses).unwrap();

        assert_eq!(report.settlements, vec![transfer("B", "A", Money::new(dec!(50)))]);
    }

    #[test]
    fn test_trio_settles_in_registration_order() {
        let (participants, expenses) = GroupFixtures::trio();
        let balances = compute_balances(&participants, &expenses).unwrap();

        let plan = SettlementPlanner.plan(&balances);

        assert_eq!(
            plan,
            vec![
                transfer("B", "A", Money::new(dec!(30))),
                transfer("C", "A", Money::new(dec!(30))),
            ]
        );
    }

    #[test]
    fn test_no_expenses_needs_no_transfers() {
        let participants = GroupFixtures::participants(&["A", "B", "C"]);
        let report = BalanceReport::compute(&participants, &[]).unwrap();

        assert!(report.settlements.is_empty());
    }

    #[test]
    fn test_cancelling_expenses_need_no_transfers() {
        let (participants, expenses) = GroupFixtures::cancelling_pair();
        let report = BalanceReport::compute(&participants, &expenses).unwrap();

        assert!(report.balances.is_settled());
        assert!(report.settlements.is_empty());
    }

    #[test]
    fn test_weekend_trip_plan() {
        let (participants, expenses) = GroupFixtures::weekend_trip();
        let report = BalanceReport::compute(&participants, &expenses).unwrap();

        assert_eq!(
            report.settlements,
            vec![
                transfer("Ben", "Ana", Money::new(dec!(69.22))),
                transfer("Cy", "Ana", Money::new(dec!(124.70))),
                transfer("Dee", "Ana", Money::new(dec!(54.70))),
            ]
        );
        assert_plan_settles(&report.balances, &report.settlements);
        assert_plan_well_formed(&report.balances, &report.settlements);
    }

    #[test]
    fn test_dinner_for_seven_settles_exactly() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let participants = GroupFixtures::participants(&names);
        let expenses = vec![ExpenseBuilder::new()
            .with_amount(MoneyFixtures::hundred())
            .paid_by("A")
            .split_among(&names)
            .build()];

        let report = BalanceReport::compute(&participants, &expenses).unwrap();
        let amounts: Vec<Money> = report.settlements.iter().map(|s| s.amount).collect();

        assert_eq!(
            amounts,
            vec![
                Money::new(dec!(14.29)),
                Money::new(dec!(14.29)),
                Money::new(dec!(14.29)),
                Money::new(dec!(14.28)),
                Money::new(dec!(14.28)),
                Money::new(dec!(14.28)),
            ]
        );
        assert_plan_settles(&report.balances, &report.settlements);
    }

    #[test]
    fn test_single_cent_residues_are_settled() {
        let cent = MoneyFixtures::one_cent().to_minor().unwrap();
        let balances: Balances =
            [("A", 2 * cent), ("B", -cent), ("C", -cent)].into_iter().collect();

        let plan = plan_settlements(&balances);

        assert_eq!(
            plan,
            vec![
                transfer("B", "A", MoneyFixtures::one_cent()),
                transfer("C", "A", MoneyFixtures::one_cent()),
            ]
        );
        assert_plan_settles(&balances, &plan);
    }
}

// ============================================================================
// Ordering Contract
// ============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_reordered_table_gives_different_but_valid_plan() {
        let forward: Balances =
            [("A", -1000), ("B", -2000), ("C", 2000), ("D", 1000)].into_iter().collect();
        let reversed: Balances =
            forward.iter_minor().collect::<Vec<_>>().into_iter().rev().collect();

        let first = plan_settlements(&forward);
        let second = plan_settlements(&reversed);

        assert_ne!(first, second);
        assert_plan_settles(&forward, &first);
        assert_plan_settles(&reversed, &second);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let (participants, expenses) = GroupFixtures::weekend_trip();
        let balances = compute_balances(&participants, &expenses).unwrap();

        assert_eq!(plan_settlements(&balances), plan_settlements(&balances));
    }
}

// ============================================================================
// Applying Plans
// ============================================================================

mod applying {
    use super::*;

    #[test]
    fn test_apply_moves_money_both_ways() {
        let balances: Balances = [("A", 5000), ("B", -5000)].into_iter().collect();
        let adjusted =
            apply_settlements(&balances, &[transfer("B", "A", Money::new(dec!(20)))]).unwrap();

        assert_eq!(adjusted.get("A"), Some(Money::new(dec!(30))));
        assert_eq!(adjusted.get("B"), Some(Money::new(dec!(-30))));
    }

    #[test]
    fn test_apply_empty_plan_is_identity() {
        let (participants, expenses) = GroupFixtures::trio();
        let balances = compute_balances(&participants, &expenses).unwrap();

        assert_eq!(apply_settlements(&balances, &[]).unwrap(), balances);
    }

    #[test]
    fn test_apply_appends_unknown_names() {
        let balances: Balances = [("A", 500)].into_iter().collect();
        let adjusted =
            apply_settlements(&balances, &[transfer("Zed", "A", Money::new(dec!(5)))]).unwrap();

        assert_eq!(adjusted.minor("A"), Some(0));
        assert_eq!(adjusted.minor("Zed"), Some(500));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_plan_zeroes_arbitrary_balances(balances in balances_strategy()) {
            let plan = plan_settlements(&balances);
            assert_plan_settles(&balances, &plan);
            assert_plan_well_formed(&balances, &plan);
        }

        #[test]
        fn prop_report_settles_arbitrary_groups((participants, expenses) in group_strategy()) {
            let report = BalanceReport::compute(&participants, &expenses).unwrap();
            assert_plan_settles(&report.balances, &report.settlements);
        }

        #[test]
        fn prop_plan_is_well_formed((participants, expenses) in group_strategy()) {
            let report = BalanceReport::compute(&participants, &expenses).unwrap();
            assert_plan_well_formed(&report.balances, &report.settlements);
        }

        #[test]
        fn prop_transfers_go_from_debtors_to_creditors((participants, expenses) in group_strategy()) {
            let report = BalanceReport::compute(&participants, &expenses).unwrap();
            for settlement in &report.settlements {
                let from = report.balances.minor(&settlement.from).unwrap();
                let to = report.balances.minor(&settlement.to).unwrap();
                prop_assert!(from < 0);
                prop_assert!(to > 0);
            }
        }
    }
}
