//! roomward — Access Decision Demo CLI
//!
//! Runs one or all of the livechat access scenarios against a composed
//! validator registry, showing which validator path grants (or that
//! nothing does).
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- visitor-access
//!   cargo run -p demo -- agent-access
//!   cargo run -p demo -- manager-access
//!   cargo run -p demo -- default-deny
//!   cargo run -p demo -- --config registry.toml run-all

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roomward_contracts::{
    context::AccessContext,
    error::RoomwardResult,
    principal::{Permission, Principal, UserId},
    room::{Room, RoomId, Visitor},
};
use roomward_core::AccessValidatorRegistry;
use roomward_validators::{builtin::VIEW_ROOMS, RegistryConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

/// roomward — first-match-wins room access decisions.
///
/// Each subcommand runs an access check through the composed validator
/// registry and prints the outcome.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "roomward access decision demo",
    long_about = "Runs livechat room access scenarios through the ordered validator\n\
                  registry, demonstrating first-match-wins evaluation and default deny."
)]
struct Cli {
    /// TOML registry file to compose from (defaults to all built-ins).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four scenarios in sequence.
    RunAll,
    /// The room's guest presents their session token.
    VisitorAccess,
    /// The agent currently serving the room asks for access.
    AgentAccess,
    /// A manager with the global room-view permission asks for access.
    ManagerAccess,
    /// A stranger with no evidence asks for access (default deny).
    DefaultDeny,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run(&cli);

    match result {
        Ok(()) => {
            println!("All selected scenarios completed.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> RoomwardResult<()> {
    let config = match &cli.config {
        Some(path) => RegistryConfig::from_file(path)?,
        None => RegistryConfig::all_builtin(),
    };
    let registry = config.build()?;

    print_banner(&config);

    match cli.command {
        Command::RunAll => {
            run_visitor_access(&registry)?;
            run_agent_access(&registry)?;
            run_manager_access(&registry)?;
            run_default_deny(&registry)?;
            Ok(())
        }
        Command::VisitorAccess => run_visitor_access(&registry),
        Command::AgentAccess => run_agent_access(&registry),
        Command::ManagerAccess => run_manager_access(&registry),
        Command::DefaultDeny => run_default_deny(&registry),
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

/// One demo room: open, assigned to agent "rory", guest token "tok-guest".
fn make_room() -> Room {
    let mut room =
        Room::open_for_visitor(RoomId::new("livechat-room-42"), Visitor::new("tok-guest"));
    room.served_by = Some(UserId::new("rory"));
    room
}

fn print_decision(scenario: &str, granted: bool) {
    println!(
        "  [{}] {}",
        scenario,
        if granted { "access GRANTED" } else { "access DENIED" }
    );
}

fn run_visitor_access(registry: &AccessValidatorRegistry) -> RoomwardResult<()> {
    let room = make_room();

    // Anonymous check: no principal, only the guest's session token.
    let context = AccessContext::with_visitor_token("tok-guest");
    let granted = registry.can_access_room(&room, None, Some(&context))?;
    print_decision("visitor-access", granted);
    Ok(())
}

fn run_agent_access(registry: &AccessValidatorRegistry) -> RoomwardResult<()> {
    let room = make_room();

    let agent = Principal::new(UserId::new("rory"));
    let granted = registry.can_access_room(&room, Some(&agent), None)?;
    print_decision("agent-access", granted);
    Ok(())
}

fn run_manager_access(registry: &AccessValidatorRegistry) -> RoomwardResult<()> {
    let room = make_room();

    let manager = Principal::with_permissions(UserId::new("mara"), [Permission::new(VIEW_ROOMS)]);
    let granted = registry.can_access_room(&room, Some(&manager), None)?;
    print_decision("manager-access", granted);
    Ok(())
}

fn run_default_deny(registry: &AccessValidatorRegistry) -> RoomwardResult<()> {
    let room = make_room();

    let stranger = Principal::new(UserId::new("nobody"));
    let granted = registry.can_access_room(&room, Some(&stranger), None)?;
    print_decision("default-deny", granted);
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner(config: &RegistryConfig) {
    println!();
    println!("roomward — Room Access Authorization Core");
    println!("Access Decision Demo");
    println!("=========================================");
    println!();
    println!("Evaluation per check:");
    println!("  [1] Validators run strictly in registration order");
    println!("  [2] First validator returning true grants access (short-circuit)");
    println!("  [3] No validator granting means deny by default");
    println!("  [4] A faulting validator aborts the check; faults are never a deny");
    println!();
    println!("Composition: {}", config.validators.join(" -> "));
    println!();
}
