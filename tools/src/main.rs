//! firm-runner: console shell for the company simulation.
//!
//! Usage:
//!   firm-runner                       interactive game, founding team hired
//!   firm-runner --target 250000       win at a lower valuation
//!   firm-runner --empty-roster        start with no staff
//!   firm-runner --ipc-mode            JSON command per stdin line
//!   firm-runner --events              dump the event log on exit

use anyhow::Result;
use firm_core::{
    command::{CommandOutcome, PlayerCommand},
    config::DEFAULT_TARGET_VALUATION,
    snapshot::CompanySnapshot,
    staff::Role,
    Company, GameOutcome, TurnReport,
};
use std::env;
use std::io::{self, BufRead, Write};

struct SessionConfig {
    target_valuation: f64,
    seed_roster: bool,
    ipc_mode: bool,
    dump_events: bool,
}

impl SessionConfig {
    fn from_args(args: &[String]) -> Self {
        Self {
            target_valuation: parse_arg(args, "--target", DEFAULT_TARGET_VALUATION),
            seed_roster: !args.iter().any(|a| a == "--empty-roster"),
            ipc_mode: args.iter().any(|a| a == "--ipc-mode"),
            dump_events: args.iter().any(|a| a == "--events"),
        }
    }
}

/// IPC requests: any player command, plus session control.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IpcRequest {
    Control(IpcControl),
    Player(PlayerCommand),
}

#[derive(serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum IpcControl {
    GetState,
    Quit,
}

#[derive(serde::Serialize)]
struct IpcResponse {
    session_id: String,
    outcome: Option<CommandOutcome>,
    game: GameOutcome,
    state: CompanySnapshot,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = SessionConfig::from_args(&args);
    let session_id = uuid::Uuid::new_v4().to_string();

    let mut company = if config.seed_roster {
        Company::with_founding_team()
    } else {
        Company::new()
    };
    log::info!(
        "session {session_id}: target valuation {:.0}, {} staff",
        config.target_valuation,
        company.roster().len()
    );

    if config.ipc_mode {
        run_ipc_loop(&mut company, &config, &session_id)?;
    } else {
        run_console_loop(&mut company, &config)?;
    }

    if config.dump_events {
        print!("{}", company.events().to_json_lines()?);
    }
    Ok(())
}

fn run_ipc_loop(company: &mut Company, config: &SessionConfig, session_id: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let outcome = match request {
            IpcRequest::Control(IpcControl::Quit) => break,
            IpcRequest::Control(IpcControl::GetState) => None,
            IpcRequest::Player(command) => Some(company.execute(command)?),
        };
        let response = IpcResponse {
            session_id: session_id.to_string(),
            outcome,
            game: company.outcome(config.target_valuation),
            state: company.snapshot(),
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn run_console_loop(company: &mut Company, config: &SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    print_turn_header(&company.snapshot());
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        buffer.clear();
        if handle.read_line(&mut buffer)? == 0 {
            break; // EOF
        }
        let words: Vec<&str> = buffer.split_whitespace().collect();
        let Some((&verb, rest)) = words.split_first() else {
            continue;
        };
        if verb == "help" {
            print_help();
            continue;
        }

        let command = match parse_console_command(verb, rest) {
            Ok(Some(command)) => command,
            Ok(None) => break,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match company.execute(command)? {
            CommandOutcome::Hired { staff_id } => println!("Hired staff member #{staff_id}."),
            CommandOutcome::LoanApproved { loan } => println!(
                "Loan #{} approved: {:.2} over {} months at {:.2}%.",
                loan.id,
                loan.amount,
                loan.term_months,
                loan.interest_rate * 100.0
            ),
            CommandOutcome::LoanRejected { reason } => println!("Loan rejected: {reason}."),
            CommandOutcome::Staff { lines } => {
                println!("=== STAFF ===");
                for line in lines {
                    println!("  {line}");
                }
            }
            CommandOutcome::TurnEnded { report } => {
                print_turn_summary(&report, &company.snapshot());
                match company.outcome(config.target_valuation) {
                    GameOutcome::Bankrupt => {
                        println!("Bankrupt! The company ran out of money.");
                        break;
                    }
                    GameOutcome::Won => {
                        println!(
                            "Congratulations! The company is valued at {:.0} or more.",
                            config.target_valuation
                        );
                        break;
                    }
                    GameOutcome::InProgress => print_turn_header(&company.snapshot()),
                }
            }
        }
    }
    Ok(())
}

/// `Ok(None)` means the player asked to quit.
fn parse_console_command(verb: &str, rest: &[&str]) -> Result<Option<PlayerCommand>, String> {
    let command = match verb {
        "quit" | "q" => return Ok(None),
        "list" => PlayerCommand::ListStaff,
        "end" => PlayerCommand::EndTurn,
        "hire-engineer" => PlayerCommand::Hire {
            name: "New Engineer".into(),
            role: Role::engineer(word(rest, 0, "department")?),
        },
        "hire-warehouse" => PlayerCommand::Hire {
            name: "New Warehouse Worker".into(),
            role: Role::warehouse_worker(matches!(word(rest, 0, "yes/no")?, "yes" | "y")),
        },
        "hire-marketer" => PlayerCommand::Hire {
            name: "New Marketer".into(),
            role: Role::marketer(number(rest, 0, "follower count")?),
        },
        "hire-worker" => PlayerCommand::Hire {
            name: "New Worker".into(),
            role: Role::worker(number(rest, 0, "shoe size")?),
        },
        "loan" => PlayerCommand::TakeLoan {
            amount: number(rest, 0, "amount")?,
            term_months: number(rest, 1, "term in months")?,
        },
        other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
    };
    Ok(Some(command))
}

fn word<'a>(rest: &[&'a str], index: usize, what: &str) -> Result<&'a str, String> {
    rest.get(index).copied().ok_or_else(|| format!("Missing {what}."))
}

fn number<T: std::str::FromStr>(rest: &[&str], index: usize, what: &str) -> Result<T, String> {
    word(rest, index, what)?
        .parse()
        .map_err(|_| format!("Invalid {what}."))
}

fn print_help() {
    println!("Commands:");
    println!("  list                      list staff");
    println!("  hire-engineer <dept>      hire an engineer");
    println!("  hire-warehouse <yes|no>   hire a warehouse worker (forklift license?)");
    println!("  hire-marketer <followers> hire a marketer");
    println!("  hire-worker <shoe-size>   hire a worker");
    println!("  loan <amount> <months>    take a loan");
    println!("  end                       end the turn");
    println!("  quit                      leave the game");
}

fn print_turn_header(s: &CompanySnapshot) {
    println!();
    println!("=== TURN {} ===", s.turn);
    println!("  balance:        {:.2}", s.bank_balance);
    println!("  valuation:      {:.2}", s.valuation);
    println!("  debt:           {:.2}", s.total_debt);
    println!("  installment:    {:.2}", s.total_installment);
    println!("  repayment left: {} months", s.max_remaining_months);
    println!("  staff:          {} ({:.2}/month)", s.headcount, s.monthly_salary);
}

fn print_turn_summary(report: &TurnReport, s: &CompanySnapshot) {
    println!();
    println!("=== TURN {} SUMMARY ===", report.turn);
    println!("  income:             {:.2}", report.income);
    println!("  production:         {:.0} units", report.production);
    println!("  sales:              {:.0} units", report.sales);
    println!("  potential sales:    {:.0} units", s.potential_sales);
    println!("  warehouse capacity: {:.0} units", s.warehouse_capacity);
    println!("  salaries paid:      {:.2}", report.salaries);
    println!("  loan repayment:     {:.2}", report.repayment);
    if report.loans_retired > 0 {
        println!("  loans repaid:       {}", report.loans_retired);
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
