//! The company engine, the single state machine the shell drives.
//!
//! STATES:
//!   Uninitialized → Active (loops until the shell stops issuing commands)
//!
//! Bankrupt and Won are NOT enforced here. The company exposes
//! `is_bankrupt()` / `has_won()` and the caller decides when to stop.
//!
//! END-OF-TURN ORDER (fixed, never reordered):
//!   1. Bootstrap (first call only)
//!   2. Pay salaries
//!   3. Compute income and credit it
//!   4. Record income, recompute valuation
//!   5. Amortize loans, debit the summed installments

use crate::{
    clock::TurnClock,
    command::{CommandOutcome, PlayerCommand},
    config::STARTING_BALANCE,
    error::SimResult,
    event::{EventLog, SimEvent},
    loan::{Loan, LoanBook},
    production::ProductionReport,
    snapshot::CompanySnapshot,
    staff::{Role, StaffRoster},
    types::{Money, Months, StaffId, Turn},
    valuation::IncomeHistory,
};
use serde::{Deserialize, Serialize};

/// Summary of one `end_turn` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: Turn,
    pub salaries: Money,
    pub income: Money,
    pub production: f64,
    pub sales: f64,
    pub repayment: Money,
    pub loans_retired: usize,
    pub bank_balance: Money,
    pub valuation: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    InProgress,
    Bankrupt,
    Won,
}

#[derive(Debug, Clone)]
pub struct Company {
    clock: TurnClock,
    bank_balance: Money,
    roster: StaffRoster,
    loans: LoanBook,
    history: IncomeHistory,
    last: ProductionReport,
    events: EventLog,
}

impl Company {
    /// A fresh company: starting balance, no staff, no loans.
    pub fn new() -> Self {
        Self {
            clock: TurnClock::new(),
            bank_balance: STARTING_BALANCE,
            roster: StaffRoster::new(),
            loans: LoanBook::new(),
            history: IncomeHistory::new(),
            last: ProductionReport::default(),
            events: EventLog::new(),
        }
    }

    /// A fresh company with one hire of each role already on staff.
    pub fn with_founding_team() -> Self {
        let mut company = Self::new();
        company.hire("Alice", Role::engineer("Mechanical"));
        company.hire("Bob", Role::warehouse_worker(true));
        company.hire("Carol", Role::marketer(5000));
        company.hire("Dave", Role::worker(42.5));
        company
    }

    // ── Mutators ───────────────────────────────────────────────

    pub fn hire(&mut self, name: impl Into<String>, role: Role) -> StaffId {
        let name = name.into();
        let kind = role.kind();
        let staff_id = self.roster.hire(name.clone(), role);
        log::info!(
            "turn={} staff: hired {} #{staff_id} ({name})",
            self.clock.current_turn,
            kind.title()
        );
        self.events.push(SimEvent::StaffHired {
            turn: self.clock.current_turn,
            staff_id,
            name,
            role: kind,
        });
        staff_id
    }

    /// Borrow `amount` over `term_months`. Runs the bootstrap first, even
    /// if the request is then rejected. A rejection changes nothing else.
    pub fn request_loan(&mut self, amount: Money, term_months: Months) -> SimResult<Loan> {
        self.ensure_initialized();
        let turn = self.clock.current_turn;
        let valuation = self.valuation();

        let loan = match self.loans.originate(amount, term_months, valuation).cloned() {
            Ok(loan) => loan,
            Err(e) => {
                log::warn!("turn={turn} loans: rejected {amount:.2} over {term_months} months: {e}");
                self.events.push(SimEvent::LoanRejected {
                    turn,
                    amount,
                    term_months,
                    reason: e.to_string(),
                });
                return Err(e);
            }
        };

        self.bank_balance += loan.amount;
        log::info!(
            "turn={turn} loans: approved #{} {:.2} over {} months at {:.2}%",
            loan.id,
            loan.amount,
            loan.term_months,
            loan.interest_rate * 100.0
        );
        self.events.push(SimEvent::LoanApproved {
            turn,
            loan_id: loan.id,
            amount: loan.amount,
            term_months: loan.term_months,
            interest_rate: loan.interest_rate,
        });
        Ok(loan)
    }

    /// Close the current month. See the module docs for the step order.
    pub fn end_turn(&mut self) -> TurnReport {
        self.ensure_initialized();
        let turn = self.clock.current_turn;

        let salaries = self.roster.total_monthly_salary();
        self.bank_balance -= salaries;
        self.events.push(SimEvent::SalariesPaid { turn, total: salaries });

        let income = self.compute_income();
        self.bank_balance += income;
        self.events.push(SimEvent::IncomeBooked {
            turn,
            production: self.last.production,
            sales: self.last.sales,
            income,
        });

        self.history.record(income);
        let valuation = self.valuation();
        self.events.push(SimEvent::ValuationUpdated {
            turn,
            valuation,
            window: self.history.len(),
        });

        let repayment = self.loans.amortize();
        self.bank_balance -= repayment.total_installment;
        for payment in &repayment.payments {
            log::debug!(
                "turn={turn} loans: #{} paid {:.2}, {:.2} left over {} months",
                payment.loan_id,
                payment.installment,
                payment.remaining_amount,
                payment.remaining_months
            );
            self.events.push(SimEvent::LoanInstallmentPaid {
                turn,
                loan_id: payment.loan_id,
                installment: payment.installment,
                remaining_amount: payment.remaining_amount,
                remaining_months: payment.remaining_months,
            });
            if payment.retired {
                self.events.push(SimEvent::LoanRetired { turn, loan_id: payment.loan_id });
            }
        }

        self.clock.advance();
        self.events.push(SimEvent::TurnCompleted {
            turn,
            bank_balance: self.bank_balance,
            valuation,
        });

        log::info!(
            "turn={turn} company: income {income:.2}, salaries {salaries:.2}, \
             repayment {:.2}, balance {:.2}, valuation {valuation:.2}",
            repayment.total_installment,
            self.bank_balance
        );
        if self.is_bankrupt() {
            log::warn!("turn={turn} company: bank balance {:.2}, bankrupt", self.bank_balance);
        }

        TurnReport {
            turn,
            salaries,
            income,
            production: self.last.production,
            sales: self.last.sales,
            repayment: repayment.total_installment,
            loans_retired: repayment.retired_count(),
            bank_balance: self.bank_balance,
            valuation,
        }
    }

    /// Dispatch a shell command. Loan rejections come back as
    /// `CommandOutcome::LoanRejected`, not as errors.
    pub fn execute(&mut self, command: PlayerCommand) -> SimResult<CommandOutcome> {
        log::debug!("turn={} command: {}", self.clock.current_turn, command.name());
        let outcome = match command {
            PlayerCommand::Hire { name, role } => CommandOutcome::Hired {
                staff_id: self.hire(name, role),
            },
            PlayerCommand::TakeLoan { amount, term_months } => {
                match self.request_loan(amount, term_months) {
                    Ok(loan) => CommandOutcome::LoanApproved { loan },
                    Err(e) if e.is_loan_rejection() => CommandOutcome::LoanRejected {
                        reason: e.to_string(),
                    },
                    Err(e) => return Err(e),
                }
            }
            PlayerCommand::ListStaff => CommandOutcome::Staff {
                lines: self.staff_descriptions(),
            },
            PlayerCommand::EndTurn => CommandOutcome::TurnEnded {
                report: self.end_turn(),
            },
        };
        Ok(outcome)
    }

    /// Recompute production, sales and income from the current roster
    /// and cache them. Does not touch the bank balance.
    pub fn compute_income(&mut self) -> Money {
        self.last = ProductionReport::compute(&self.roster.contributions());
        self.last.income
    }

    /// One-time valuation seed so loan ceilings and win checks are
    /// meaningful before the first turn ends. Credits the bootstrap
    /// income to the bank. Returns true if it ran.
    pub fn ensure_initialized(&mut self) -> bool {
        if self.clock.is_initialized() {
            return false;
        }
        let income = self.compute_income();
        self.last = ProductionReport::bootstrap_estimate(income);
        self.bank_balance += income;
        self.history.record(income);
        self.clock.activate();

        let turn = self.clock.current_turn;
        log::debug!("turn={turn} company: bootstrap income {income:.2}");
        self.events.push(SimEvent::Bootstrapped {
            turn,
            income,
            production: self.last.production,
            valuation: self.valuation(),
        });
        true
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn bank_balance(&self) -> Money {
        self.bank_balance
    }

    pub fn last_income(&self) -> Money {
        self.last.income
    }

    pub fn last_production(&self) -> f64 {
        self.last.production
    }

    pub fn last_sales(&self) -> f64 {
        self.last.sales
    }

    pub fn potential_sales(&self) -> f64 {
        self.last.potential_sales()
    }

    /// Trailing mean of up to the last three monthly incomes.
    pub fn valuation(&self) -> Money {
        self.history.valuation()
    }

    pub fn income_history(&self) -> &IncomeHistory {
        &self.history
    }

    pub fn warehouse_capacity(&self) -> f64 {
        self.roster.warehouse_capacity()
    }

    pub fn total_debt(&self) -> Money {
        self.loans.total_debt()
    }

    pub fn total_installment(&self) -> Money {
        self.loans.total_installment()
    }

    pub fn max_remaining_months(&self) -> Months {
        self.loans.max_remaining_months()
    }

    pub fn loans(&self) -> &LoanBook {
        &self.loans
    }

    pub fn roster(&self) -> &StaffRoster {
        &self.roster
    }

    pub fn total_monthly_salary(&self) -> Money {
        self.roster.total_monthly_salary()
    }

    pub fn staff_descriptions(&self) -> Vec<String> {
        self.roster.list()
    }

    pub fn is_initialized(&self) -> bool {
        self.clock.is_initialized()
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bank_balance <= 0.0
    }

    pub fn has_won(&self, target_valuation: Money) -> bool {
        self.valuation() >= target_valuation
    }

    /// Bankruptcy is checked before victory.
    pub fn outcome(&self, target_valuation: Money) -> GameOutcome {
        if self.is_bankrupt() {
            GameOutcome::Bankrupt
        } else if self.has_won(target_valuation) {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn snapshot(&self) -> CompanySnapshot {
        CompanySnapshot {
            turn: self.clock.current_turn,
            initialized: self.is_initialized(),
            bank_balance: self.bank_balance,
            last_income: self.last.income,
            last_production: self.last.production,
            last_sales: self.last.sales,
            potential_sales: self.potential_sales(),
            warehouse_capacity: self.warehouse_capacity(),
            valuation: self.valuation(),
            income_history: self.history.incomes().collect(),
            total_debt: self.total_debt(),
            total_installment: self.total_installment(),
            max_remaining_months: self.max_remaining_months(),
            open_loans: self.loans.len(),
            headcount: self.roster.len(),
            monthly_salary: self.total_monthly_salary(),
            bankrupt: self.is_bankrupt(),
        }
    }
}

impl Default for Company {
    fn default() -> Self {
        Self::new()
    }
}
