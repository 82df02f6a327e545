//! Property-based checks for the formula catalog and the ledger.
//!
//! These tests pin the algebraic identities the formulas promise and the
//! invariants the ledger keeps across arbitrary valid inputs, not just the
//! worked examples in the unit tests.

use approx::assert_relative_eq;
use fieldcalc::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_formula_is_deterministic(
        positive in 0.01..1.0e6_f64,
        signed in -1.0e6..1.0e6_f64,
        fraction in 0.001..=1.0_f64,
        months in 0..120_u32,
        cashflows in vec(-1.0e6..1.0e6_f64, 0..16),
    ) {
        prop_assert_eq!(api_gravity(positive).unwrap(), api_gravity(positive).unwrap());
        prop_assert_eq!(
            gor_from_rates(signed, positive).unwrap(),
            gor_from_rates(signed, positive).unwrap()
        );
        prop_assert_eq!(
            darcy_flow_rate(signed, signed, signed, positive, positive, positive).unwrap(),
            darcy_flow_rate(signed, signed, signed, positive, positive, positive).unwrap()
        );
        prop_assert_eq!(
            three_phase_power_kw(positive, positive, fraction).unwrap(),
            three_phase_power_kw(positive, positive, fraction).unwrap()
        );
        prop_assert_eq!(
            motor_efficiency(signed, positive).unwrap(),
            motor_efficiency(signed, positive).unwrap()
        );
        prop_assert_eq!(
            npv(fraction, &cashflows).unwrap(),
            npv(fraction, &cashflows).unwrap()
        );
        prop_assert_eq!(roi(signed, positive).unwrap(), roi(signed, positive).unwrap());
        prop_assert_eq!(
            simple_interest(signed, months, fraction),
            simple_interest(signed, months, fraction)
        );
        prop_assert_eq!(
            expected_return(positive, fraction, months),
            expected_return(positive, fraction, months)
        );
        prop_assert_eq!(
            oee(fraction, fraction, fraction).unwrap(),
            oee(fraction, fraction, fraction).unwrap()
        );
        prop_assert_eq!(
            defect_rate(positive, positive).unwrap(),
            defect_rate(positive, positive).unwrap()
        );
        prop_assert_eq!(
            z_score(signed, signed, positive).unwrap(),
            z_score(signed, signed, positive).unwrap()
        );
        prop_assert_eq!(
            exponential_smoothing(signed, signed, fraction).unwrap(),
            exponential_smoothing(signed, signed, fraction).unwrap()
        );
    }

    #[test]
    fn api_gravity_is_finite_for_any_positive_gravity(sg in 0.01..10.0_f64) {
        let api = api_gravity(sg).unwrap();
        prop_assert!(api.is_finite());
    }

    #[test]
    fn api_gravity_rejects_the_nonpositive_half_line(sg in -10.0..=0.0_f64) {
        let err = api_gravity(sg).unwrap_err();
        prop_assert_eq!(err.parameter(), "sg_oil");
    }

    #[test]
    fn gor_is_plain_division(q_gas in 0.0..1.0e9_f64, q_oil in 0.1..1.0e6_f64) {
        prop_assert_eq!(gor_from_rates(q_gas, q_oil).unwrap(), q_gas / q_oil);
    }

    #[test]
    fn npv_at_zero_rate_collapses_to_the_plain_sum(
        cashflows in vec(-1.0e6..1.0e6_f64, 0..16),
    ) {
        let value = npv(0.0, &cashflows).unwrap();
        let plain: Scalar = cashflows.iter().sum();
        prop_assert_eq!(value, plain);
    }

    #[test]
    fn npv_rejects_rates_at_or_below_minus_one(
        rate in -10.0..=-1.0_f64,
        cashflows in vec(-1.0e6..1.0e6_f64, 0..16),
    ) {
        prop_assert!(npv(rate, &cashflows).is_err());
    }

    #[test]
    fn roi_matches_its_closed_form(
        gain in -1.0e6..1.0e6_f64,
        cost in prop_oneof![-1.0e6..-0.01_f64, 0.01..1.0e6_f64],
    ) {
        prop_assert_eq!(roi(gain, cost).unwrap(), (gain - cost) / cost);
    }

    #[test]
    fn z_score_round_trips_through_the_distribution(
        x in -1.0e6..1.0e6_f64,
        mean in -1.0e6..1.0e6_f64,
        std in 0.001..1.0e6_f64,
    ) {
        let z = z_score(x, mean, std).unwrap();
        assert_relative_eq!(z * std + mean, x, epsilon = 1.0e-6, max_relative = 1.0e-9);
    }

    #[test]
    fn the_mean_always_scores_zero(mean in -1.0e6..1.0e6_f64, std in 0.001..1.0e6_f64) {
        prop_assert_eq!(z_score(mean, mean, std).unwrap(), 0.0);
    }

    #[test]
    fn oee_stays_in_the_unit_interval(
        availability in 0.0..=1.0_f64,
        performance in 0.0..=1.0_f64,
        quality in 0.0..=1.0_f64,
    ) {
        let value = oee(availability, performance, quality).unwrap();
        prop_assert!(in_unit_interval(value));
    }

    #[test]
    fn defect_rate_stays_in_the_unit_interval_when_defects_fit(
        total in 1.0..1.0e9_f64,
        fraction in 0.0..=1.0_f64,
    ) {
        let defects = fraction * total;
        let rate = defect_rate(defects, total).unwrap();
        prop_assert!(in_unit_interval(rate));
    }

    #[test]
    fn smoothing_stays_between_forecast_and_actual(
        prev in -1.0e6..1.0e6_f64,
        actual in -1.0e6..1.0e6_f64,
        alpha in 0.001..=1.0_f64,
    ) {
        let f = exponential_smoothing(prev, actual, alpha).unwrap();
        let lo = prev.min(actual);
        let hi = prev.max(actual);
        prop_assert!(f >= lo - 1.0e-6 && f <= hi + 1.0e-6);
    }

    #[test]
    fn full_smoothing_weight_returns_the_actual(
        prev in -1.0e6..1.0e6_f64,
        actual in -1.0e6..1.0e6_f64,
    ) {
        prop_assert_eq!(exponential_smoothing(prev, actual, 1.0).unwrap(), actual);
    }

    #[test]
    fn smoothing_rejects_alpha_outside_the_half_open_interval(
        prev in -1.0e6..1.0e6_f64,
        actual in -1.0e6..1.0e6_f64,
        alpha in prop_oneof![-10.0..=0.0_f64, 1.001..10.0_f64],
    ) {
        prop_assert!(exponential_smoothing(prev, actual, alpha).is_err());
    }

    #[test]
    fn ledger_projections_track_every_entry(
        budgets in vec(0.0..1.0e6_f64, 0..12),
        rate in 0.0..=1.0_f64,
        months in 0..120_u32,
    ) {
        let mut log = ActivityLog::new("prop");
        for (i, budget) in budgets.iter().enumerate() {
            log.add(Activity::new(
                format!("activity-{}", i),
                ActivityKind::Investment,
                *budget,
                0.0,
            ));
        }
        prop_assert_eq!(log.len(), budgets.len());

        let points = log.expected_returns(rate, months);
        prop_assert_eq!(points.len(), budgets.len());
        let from_points: Scalar = points.iter().map(|p| p.value).sum();
        prop_assert_eq!(from_points, log.total_expected_return(rate, months));

        log.clear();
        prop_assert!(log.is_empty());
        prop_assert!(log.expected_returns(rate, months).is_empty());
    }

    #[test]
    fn ledger_projections_are_deterministic(
        budgets in vec(0.0..1.0e6_f64, 0..12),
        rate in 0.0..=1.0_f64,
        months in 0..120_u32,
    ) {
        let mut log = ActivityLog::new("repeat");
        for (i, budget) in budgets.iter().enumerate() {
            log.add(Activity::new(
                format!("activity-{}", i),
                ActivityKind::Investment,
                *budget,
                0.0,
            ));
        }
        prop_assert_eq!(log.expected_returns(rate, months), log.expected_returns(rate, months));
        prop_assert_eq!(
            log.total_expected_return(rate, months),
            log.total_expected_return(rate, months)
        );
    }
}
