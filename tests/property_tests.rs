//! Property-based tests for the wash bay invariants.
//!
//! These tests use proptest to drive bays through random operation
//! sequences and check the invariants hold after every step.

use proptest::prelude::*;
use washbay::{BayError, Money, Phase, PriceList, WashBay, WashOptions};

#[derive(Clone, Debug)]
enum Op {
    Start(WashOptions),
    Advance,
    Reset,
}

prop_compose! {
    fn arbitrary_options()(presoak in any::<bool>(), dry in any::<bool>(), wax in any::<bool>()) -> WashOptions {
        WashOptions::new(presoak, dry, wax)
    }
}

prop_compose! {
    fn valid_options()(presoak in any::<bool>(), dry in any::<bool>(), wax in any::<bool>()) -> WashOptions {
        WashOptions::new(presoak, dry, dry && wax)
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => arbitrary_options().prop_map(Op::Start),
        3 => Just(Op::Advance),
        1 => Just(Op::Reset),
    ]
}

fn apply(bay: &mut WashBay, op: &Op) -> Result<(), BayError> {
    match op {
        Op::Start(options) => bay.start_cycle(*options),
        Op::Advance => bay.advance_phase().map(|_| ()),
        Op::Reset => {
            bay.reset();
            Ok(())
        }
    }
}

proptest! {
    #[test]
    fn revenue_never_decreases(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut bay = WashBay::new();
        let mut last = bay.revenue();

        for op in &ops {
            let _ = apply(&mut bay, op);
            prop_assert!(bay.revenue() >= last);
            last = bay.revenue();
        }
    }

    #[test]
    fn failed_operations_leave_bay_unchanged(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut bay = WashBay::new();

        for op in &ops {
            let before = (bay.phase(), bay.is_busy(), bay.options(), bay.revenue());
            if apply(&mut bay, op).is_err() {
                let after = (bay.phase(), bay.is_busy(), bay.options(), bay.revenue());
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn idle_means_not_busy_and_no_options(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut bay = WashBay::new();

        for op in &ops {
            let _ = apply(&mut bay, op);
            if bay.phase() == Phase::Idle {
                prop_assert!(!bay.is_busy());
                prop_assert!(bay.options().is_empty());
            }
            if bay.is_busy() {
                prop_assert_ne!(bay.phase(), Phase::Idle);
                prop_assert!(!bay.phase().is_charge());
            }
        }
    }

    #[test]
    fn reset_restores_idle_and_keeps_revenue(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut bay = WashBay::new();
        for op in &ops {
            let _ = apply(&mut bay, op);
        }
        let revenue = bay.revenue();

        bay.reset();

        prop_assert_eq!(bay.phase(), Phase::Idle);
        prop_assert!(!bay.is_busy());
        prop_assert!(!bay.manual_presoak());
        prop_assert!(!bay.manual_dry());
        prop_assert!(!bay.waxing());
        prop_assert_eq!(bay.revenue(), revenue);
    }

    #[test]
    fn waxing_without_dry_is_always_rejected(presoak in any::<bool>()) {
        let mut bay = WashBay::new();

        let result = bay.start_cycle(WashOptions::new(presoak, false, true));

        prop_assert_eq!(result, Err(BayError::InvalidOptionCombination));
        prop_assert_eq!(bay.phase(), Phase::Idle);
        prop_assert!(bay.revenue().is_zero());
    }

    #[test]
    fn run_cycle_follows_route_and_bills_once(options in valid_options()) {
        let mut bay = WashBay::new();

        let phases = bay.run_cycle(options).unwrap();

        let mut expected = Phase::route(&options);
        expected.push(Phase::Idle);
        prop_assert_eq!(phases, expected);
        prop_assert_eq!(bay.revenue(), PriceList::default().quote(&options));
        prop_assert_eq!(bay.completed_cycles(), 1);
    }

    #[test]
    fn revenue_is_sum_of_quotes(cycles in prop::collection::vec(valid_options(), 0..10)) {
        let mut bay = WashBay::new();

        for options in &cycles {
            bay.run_cycle(*options).unwrap();
        }

        let expected: Money = cycles.iter().map(|o| PriceList::default().quote(o)).sum();
        prop_assert_eq!(bay.revenue(), expected);
    }
}
