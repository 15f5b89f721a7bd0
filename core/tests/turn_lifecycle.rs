//! Turn lifecycle tests: bootstrap, end-of-turn ordering, valuation window,
//! terminal predicates.

use firm_core::{clock::TurnPhase, event::SimEvent, staff::Role, Company, GameOutcome};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Bootstrap runs once, seeds the valuation, and credits its income.
#[test]
fn bootstrap_is_idempotent() {
    let mut company = Company::with_founding_team();
    assert_eq!(company.valuation(), 0.0);
    assert!(company.income_history().is_empty());
    assert_eq!(company.clock().phase, TurnPhase::Uninitialized);

    assert!(company.ensure_initialized());
    assert!(!company.ensure_initialized());

    assert_eq!(company.clock().phase, TurnPhase::Active);
    assert!(approx(company.bank_balance(), 70_000.0));
    assert!(approx(company.valuation(), 50_000.0));
    assert_eq!(company.income_history().len(), 1);
}

/// The bootstrap back-solves production from income using one engineer's price.
#[test]
fn bootstrap_production_is_back_solved() {
    let mut company = Company::with_founding_team();
    company.hire("Erin", Role::engineer("Civil"));

    company.ensure_initialized();

    // income = 1000 × 100; production = income / 50
    assert!(approx(company.last_income(), 100_000.0));
    assert!(approx(company.last_production(), 2_000.0));
    assert!(approx(company.last_sales(), 2_000.0));

    company.end_turn();
    assert!(approx(company.last_production(), 1_000.0));
}

/// First end of turn: bootstrap, salaries, income, valuation.
#[test]
fn first_turn_books_bootstrap_and_regular_income() {
    let mut company = Company::with_founding_team();

    let report = company.end_turn();

    assert_eq!(report.turn, 1);
    assert!(approx(report.salaries, 19_500.0));
    assert!(approx(report.income, 50_000.0));
    assert!(approx(report.bank_balance, 20_000.0 + 50_000.0 - 19_500.0 + 50_000.0));
    assert!(approx(report.valuation, 50_000.0));
    assert_eq!(company.income_history().incomes().collect::<Vec<_>>(), vec![50_000.0, 50_000.0]);
    assert_eq!(company.clock().current_turn, 2);
    assert_eq!(company.clock().turns_completed(), 1);
}

#[test]
fn end_turn_events_follow_fixed_order() {
    let mut company = Company::with_founding_team();
    company.end_turn();

    let kinds: Vec<_> = company.events().for_turn(1).map(SimEvent::type_name).collect();
    assert_eq!(
        kinds,
        vec![
            "staff_hired",
            "staff_hired",
            "staff_hired",
            "staff_hired",
            "bootstrapped",
            "salaries_paid",
            "income_booked",
            "valuation_updated",
            "turn_completed",
        ]
    );
}

/// History never exceeds three entries; constant roster keeps valuation flat.
#[test]
fn constant_roster_valuation_is_flat() {
    let mut company = Company::with_founding_team();
    for _ in 0..5 {
        company.end_turn();
        assert!(company.income_history().len() <= 3);
    }
    assert_eq!(company.income_history().len(), 3);
    assert!(approx(company.valuation(), 50_000.0));
}

/// Valuation is the mean of the last three incomes only.
#[test]
fn valuation_uses_last_three_incomes() {
    let mut company = Company::with_founding_team();

    company.end_turn(); // [50k, 50k]
    company.hire("E2", Role::engineer("Civil"));
    company.end_turn(); // [50k, 50k, 100k]
    company.hire("E3", Role::engineer("Nuclear"));
    company.end_turn(); // [50k, 100k, 150k]
    assert!(approx(company.valuation(), 100_000.0));

    company.end_turn(); // [100k, 150k, 150k]
    assert!(approx(company.valuation(), 400_000.0 / 3.0));

    company.end_turn(); // [150k, 150k, 150k]
    assert!(approx(company.valuation(), 150_000.0));
    assert_eq!(
        company.income_history().incomes().collect::<Vec<_>>(),
        vec![150_000.0, 150_000.0, 150_000.0]
    );
}

/// Salaries are paid even when the balance goes negative, and the company
/// keeps accepting turns afterwards.
#[test]
fn salaries_drive_balance_negative_without_guard() {
    let mut company = Company::new();
    company.hire("Solo", Role::engineer("Mechanical"));

    let balances: Vec<_> = (0..4).map(|_| company.end_turn().bank_balance).collect();
    assert_eq!(balances, vec![14_000.0, 8_000.0, 2_000.0, -4_000.0]);
    assert!(company.is_bankrupt());

    let report = company.end_turn();
    assert_eq!(report.bank_balance, -10_000.0);
    assert_eq!(report.turn, 5);
}

#[test]
fn bankrupt_exactly_at_zero() {
    let mut company = Company::new();
    company.hire("A", Role::worker(40.0));
    company.hire("B", Role::warehouse_worker(false));
    company.hire("C", Role::worker(41.0));
    company.hire("D", Role::engineer("Mechanical"));
    company.hire("E", Role::engineer("Civil")); // zero demand: salaries 25 000

    assert!(!company.is_bankrupt());
    company.end_turn(); // bootstrap income 0, 20 000 − 25 000
    assert!(company.is_bankrupt());

    let mut zero = Company::new();
    zero.hire("A", Role::marketer(1));
    zero.hire("B", Role::marketer(2));
    zero.hire("C", Role::marketer(3));
    zero.hire("D", Role::marketer(4)); // 20 000 in salaries
    zero.end_turn();
    assert_eq!(zero.bank_balance(), 0.0);
    assert!(zero.is_bankrupt());
}

#[test]
fn win_predicate_compares_valuation() {
    let mut company = Company::with_founding_team();
    company.end_turn();

    assert!(company.has_won(50_000.0));
    assert!(!company.has_won(50_000.01));
    assert_eq!(company.outcome(50_000.0), GameOutcome::Won);
    assert_eq!(company.outcome(5_000_000.0), GameOutcome::InProgress);
}

/// Bankruptcy wins over victory when both hold.
#[test]
fn bankruptcy_checked_before_victory() {
    let mut company = Company::new();
    company.hire("Solo", Role::marketer(1));
    for _ in 0..4 {
        company.end_turn();
    }
    assert!(company.is_bankrupt());
    assert!(company.has_won(0.0));
    assert_eq!(company.outcome(0.0), GameOutcome::Bankrupt);
}
