//! Staff roster: who works for the company and what each head adds.
//!
//! Every role is paid a fixed monthly salary and contributes a fixed
//! coefficient to exactly one economic quantity:
//!   - Engineer         → unit price
//!   - WarehouseWorker  → production capacity (also warehouse capacity)
//!   - Marketer         → demand
//!   - Worker           → production capacity
//!
//! The role-specific attributes (department, forklift licence, followers,
//! shoe size) are descriptive only and never enter the computation.

use crate::{
    config::{
        ENGINEER_SALARY, ENGINEER_UNIT_PRICE, MARKETER_DEMAND, MARKETER_SALARY,
        WAREHOUSE_WORKER_CAPACITY, WAREHOUSE_WORKER_SALARY, WORKER_CAPACITY, WORKER_SALARY,
    },
    types::{Money, StaffId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A workforce variant together with its descriptive attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    Engineer { department: String },
    WarehouseWorker { forklift_license: bool },
    Marketer { followers: u32 },
    Worker { shoe_size: f64 },
}

/// The attribute-free discriminant of a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Engineer,
    WarehouseWorker,
    Marketer,
    Worker,
}

/// Which economic quantity a role feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    UnitPrice,
    Capacity,
    Demand,
}

impl Role {
    pub fn engineer(department: impl Into<String>) -> Self {
        Self::Engineer { department: department.into() }
    }

    pub fn warehouse_worker(forklift_license: bool) -> Self {
        Self::WarehouseWorker { forklift_license }
    }

    pub fn marketer(followers: u32) -> Self {
        Self::Marketer { followers }
    }

    pub fn worker(shoe_size: f64) -> Self {
        Self::Worker { shoe_size }
    }

    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Engineer { .. }        => RoleKind::Engineer,
            Self::WarehouseWorker { .. } => RoleKind::WarehouseWorker,
            Self::Marketer { .. }        => RoleKind::Marketer,
            Self::Worker { .. }          => RoleKind::Worker,
        }
    }

    pub fn monthly_salary(&self) -> Money {
        self.kind().monthly_salary()
    }

    pub fn contribution(&self) -> (ContributionKind, f64) {
        self.kind().contribution()
    }
}

impl RoleKind {
    pub fn monthly_salary(self) -> Money {
        match self {
            Self::Engineer        => ENGINEER_SALARY,
            Self::WarehouseWorker => WAREHOUSE_WORKER_SALARY,
            Self::Marketer        => MARKETER_SALARY,
            Self::Worker          => WORKER_SALARY,
        }
    }

    pub fn contribution(self) -> (ContributionKind, f64) {
        match self {
            Self::Engineer        => (ContributionKind::UnitPrice, ENGINEER_UNIT_PRICE),
            Self::WarehouseWorker => (ContributionKind::Capacity, WAREHOUSE_WORKER_CAPACITY),
            Self::Marketer        => (ContributionKind::Demand, MARKETER_DEMAND),
            Self::Worker          => (ContributionKind::Capacity, WORKER_CAPACITY),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Engineer        => "Engineer",
            Self::WarehouseWorker => "Warehouse worker",
            Self::Marketer        => "Marketer",
            Self::Worker          => "Worker",
        }
    }
}

/// A single hired person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: Role,
}

impl StaffMember {
    /// One-line, human-readable description for staff listings.
    pub fn describe(&self) -> String {
        let detail = match &self.role {
            Role::Engineer { department } => format!("department: {department}"),
            Role::WarehouseWorker { forklift_license } => format!(
                "forklift license: {}",
                if *forklift_license { "yes" } else { "no" }
            ),
            Role::Marketer { followers } => format!("followers: {followers}"),
            Role::Worker { shoe_size } => format!("shoe size: {shoe_size}"),
        };
        format!(
            "{}: {}, {}, salary: {:.0}",
            self.role.kind().title(),
            self.name,
            detail,
            self.role.monthly_salary()
        )
    }
}

/// Summed per-head contributions, one total per economic quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributions {
    pub unit_price: f64,
    pub capacity: f64,
    pub demand: f64,
}

impl Contributions {
    fn add(&mut self, kind: ContributionKind, amount: f64) {
        match kind {
            ContributionKind::UnitPrice => self.unit_price += amount,
            ContributionKind::Capacity  => self.capacity += amount,
            ContributionKind::Demand    => self.demand += amount,
        }
    }
}

/// Append-only, hire-ordered list of staff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffRoster {
    members: Vec<StaffMember>,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new staff member. Always succeeds; names need not be unique.
    pub fn hire(&mut self, name: impl Into<String>, role: Role) -> StaffId {
        let id = self.members.len() as StaffId + 1;
        self.members.push(StaffMember { id, name: name.into(), role });
        id
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn total_monthly_salary(&self) -> Money {
        self.members.iter().fold(0.0, |acc, m| acc + m.role.monthly_salary())
    }

    pub fn contributions(&self) -> Contributions {
        self.members.iter().fold(Contributions::default(), |mut acc, m| {
            let (kind, amount) = m.role.contribution();
            acc.add(kind, amount);
            acc
        })
    }

    /// Storage capacity from warehouse workers alone. Reporting only;
    /// production capacity also counts regular workers.
    pub fn warehouse_capacity(&self) -> f64 {
        self.members
            .iter()
            .filter(|m| m.role.kind() == RoleKind::WarehouseWorker)
            .fold(0.0, |acc, m| acc + m.role.contribution().1)
    }

    pub fn headcount_by_role(&self) -> BTreeMap<RoleKind, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.members {
            *counts.entry(m.role.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Descriptions of every member, in hire order.
    pub fn list(&self) -> Vec<String> {
        self.members.iter().map(StaffMember::describe).collect()
    }
}
