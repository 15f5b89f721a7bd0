//! Staff roster tests: salaries, contributions, listing order.

use firm_core::staff::{Role, RoleKind, StaffRoster};

fn mixed_roster() -> StaffRoster {
    let mut roster = StaffRoster::new();
    roster.hire("Alice", Role::engineer("Mechanical"));
    roster.hire("Bob", Role::warehouse_worker(true));
    roster.hire("Carol", Role::marketer(5000));
    roster.hire("Dave", Role::worker(42.5));
    roster
}

/// Salary total is the sum of fixed per-role salaries, whatever the hire order.
#[test]
fn salary_total_ignores_hire_order() {
    let forward = mixed_roster();

    let mut reversed = StaffRoster::new();
    reversed.hire("Dave", Role::worker(42.5));
    reversed.hire("Carol", Role::marketer(5000));
    reversed.hire("Bob", Role::warehouse_worker(true));
    reversed.hire("Alice", Role::engineer("Mechanical"));

    assert_eq!(forward.total_monthly_salary(), 6000.0 + 4000.0 + 5000.0 + 4500.0);
    assert_eq!(forward.total_monthly_salary(), reversed.total_monthly_salary());
}

#[test]
fn empty_roster_costs_nothing_and_contributes_nothing() {
    let roster = StaffRoster::new();
    assert!(roster.is_empty());
    assert_eq!(roster.total_monthly_salary(), 0.0);

    let c = roster.contributions();
    assert_eq!((c.unit_price, c.capacity, c.demand), (0.0, 0.0, 0.0));
}

/// Each role feeds exactly one quantity.
#[test]
fn contributions_route_by_role() {
    let mut roster = mixed_roster();
    roster.hire("Erin", Role::engineer("Civil"));
    roster.hire("Frank", Role::worker(44.0));

    let c = roster.contributions();
    assert_eq!(c.unit_price, 100.0);
    assert_eq!(c.capacity, 1500.0);
    assert_eq!(c.demand, 1000.0);
}

/// Warehouse capacity counts warehouse workers only, not regular workers.
#[test]
fn warehouse_capacity_excludes_workers() {
    let mut roster = StaffRoster::new();
    roster.hire("W1", Role::worker(40.0));
    roster.hire("W2", Role::worker(41.0));
    assert_eq!(roster.warehouse_capacity(), 0.0);
    assert_eq!(roster.contributions().capacity, 1000.0);

    roster.hire("Bob", Role::warehouse_worker(false));
    assert_eq!(roster.warehouse_capacity(), 500.0);
    assert_eq!(roster.contributions().capacity, 1500.0);
}

#[test]
fn descriptive_attributes_do_not_change_economics() {
    let mut a = StaffRoster::new();
    a.hire("X", Role::marketer(0));
    a.hire("Y", Role::warehouse_worker(false));

    let mut b = StaffRoster::new();
    b.hire("X", Role::marketer(1_000_000));
    b.hire("Y", Role::warehouse_worker(true));

    assert_eq!(a.contributions(), b.contributions());
    assert_eq!(a.total_monthly_salary(), b.total_monthly_salary());
}

/// Listing preserves hire order and names need not be unique.
#[test]
fn list_preserves_hire_order() {
    let mut roster = mixed_roster();
    roster.hire("Alice", Role::engineer("Electrical"));

    let lines = roster.list();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Engineer: Alice"), "{}", lines[0]);
    assert!(lines[0].contains("Mechanical"));
    assert!(lines[1].starts_with("Warehouse worker: Bob"), "{}", lines[1]);
    assert!(lines[1].contains("forklift license: yes"));
    assert!(lines[2].contains("followers: 5000"));
    assert!(lines[3].contains("shoe size: 42.5"));
    assert!(lines[4].contains("Electrical"));

    let ids: Vec<_> = roster.members().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn headcount_groups_by_role() {
    let mut roster = mixed_roster();
    roster.hire("Gina", Role::marketer(10));

    let counts = roster.headcount_by_role();
    assert_eq!(counts[&RoleKind::Engineer], 1);
    assert_eq!(counts[&RoleKind::Marketer], 2);
    assert_eq!(counts.values().sum::<usize>(), roster.len());
}
