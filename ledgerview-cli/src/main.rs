use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use ledgerview_client::{build_admin, build_dashboard, HttpApi};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(name = "ledgerview", version, about = "Banking dashboard terminal client")]
struct Cli {
    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token (overrides config)
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the account dashboard
    Dashboard,

    /// Fetch and print the admin overview
    Admin,

    /// Write a default ~/.ledgerview/config.toml
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InitConfig => {
            config::init_config()?;
            return Ok(());
        }
        _ => {}
    }

    let cfg = config::load_config()?;
    let base_url = cli.base_url.unwrap_or(cfg.backend.base_url);
    let mut api = HttpApi::new(base_url);
    if let Some(token) = cli.token.or(cfg.backend.token) {
        api = api.with_token(token);
    }

    match cli.command {
        Command::Dashboard => print_dashboard(&api).await?,
        Command::Admin => print_admin(&api).await?,
        Command::InitConfig => unreachable!(),
    }

    Ok(())
}

async fn print_dashboard(api: &HttpApi) -> Result<()> {
    let view = build_dashboard(api, Utc::now()).await?;

    println!("# Accounts\n");
    for a in &view.accounts {
        let risk = if a.is_at_risk() { "  [low balance]" } else { "" };
        println!(
            "{:<12} {:<9} {:>12}  {}  txns={}{}",
            a.account_number,
            a.account_type.as_str(),
            format!("${}", a.balance),
            if a.is_active { "active" } else { "inactive" },
            a.transaction_count.unwrap_or(0),
            risk,
        );
    }
    println!("\nTotal balance: ${}", view.total_balance);

    let q = &view.quick_stats;
    println!(
        "Deposits: ${}  Withdrawals: ${}  Pending: {} (${})\n",
        q.total_deposits, q.total_withdrawals, q.pending_count, q.pending_amount
    );

    println!("# Last 7 days\n");
    for bucket in &view.series {
        println!(
            "{}  +{:<10} -{:<10} net {}",
            bucket.label(),
            bucket.deposits,
            bucket.withdrawals,
            bucket.net
        );
    }

    if !view.type_distribution.is_empty() {
        println!("\n# By type\n");
        for group in &view.type_distribution {
            println!(
                "{:<11} count={:<4} total=${}",
                group.transaction_type.as_str(),
                group.count,
                group.total
            );
        }
    }

    println!("\n# Recent transactions\n");
    for t in view.recent_transactions.iter().take(10) {
        println!(
            "{}  {:<11} {:>10}  {:?}  {}",
            t.created_at.format("%Y-%m-%d %H:%M"),
            t.transaction_type.as_str(),
            format!("${}", t.amount),
            t.status,
            t.description,
        );
    }

    Ok(())
}

async fn print_admin(api: &HttpApi) -> Result<()> {
    let view = build_admin(api, Utc::now()).await?;

    let s = &view.stats;
    println!("# System\n");
    println!("Users: {} ({} admins)", s.total_system_users, s.total_admin_users);
    println!("Active accounts: {}", s.total_active_accounts);
    println!("System balance: ${}", s.total_system_balance);
    println!("Pending verifications: {}\n", s.pending_verifications);

    println!("# Users\n");
    for u in &view.users {
        println!(
            "{:<24} {:?}  {}  accounts={}  balance=${}",
            u.display_name(),
            u.role,
            if u.is_enabled { "enabled" } else { "disabled" },
            u.total_accounts,
            u.total_balance(),
        );
    }

    if !view.review_queue.is_empty() {
        println!("\n# Needs review\n");
        for t in &view.review_queue {
            println!(
                "{}  {:<11} {:>10}  {:?}{}",
                t.created_at.format("%Y-%m-%d %H:%M"),
                t.transaction_type.as_str(),
                format!("${}", t.amount),
                t.status,
                if t.flagged { "  [flagged]" } else { "" },
            );
        }
    }

    Ok(())
}
