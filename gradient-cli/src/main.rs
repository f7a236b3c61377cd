//! Gradient CLI — build laddered order plans from the command line.
//!
//! Commands:
//! - `plan` — compute entries, take-profits and stop-loss for a signal
//! - `config show` — print the effective strategy config and its fingerprint
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see the pairing
//! rule chosen for each plan.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gradient_core::{
    precision_for_tick, DynamicGradientEntry, OrderLine, OrderPlan, PlanRequest, PriceRange, Side,
    StrategyConfig,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "gradient",
    about = "Gradient CLI — laddered entry, take-profit and stop-loss planning"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an order plan for a signal.
    Plan {
        /// Signal direction: buy or sell.
        #[arg(long)]
        side: Side,

        /// Entry range as LOW HIGH.
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], required = true)]
        range: Vec<f64>,

        /// Take-profit prices, comma separated (e.g., 1.6,1.7,1.8,1.9).
        #[arg(long, value_delimiter = ',', required = true)]
        take_profits: Vec<f64>,

        /// Stop-loss price.
        #[arg(long)]
        stop_loss: f64,

        /// Current market price.
        #[arg(long)]
        price: f64,

        /// Balance (or lot size) the order sizes are computed against.
        #[arg(long)]
        balance: f64,

        /// Decimal places for output prices.
        #[arg(long, conflicts_with = "tick_size")]
        precision: Option<u32>,

        /// Derive the precision from the instrument tick size (e.g., 0.001 → 3).
        #[arg(long)]
        tick_size: Option<f64>,

        /// Strategy config TOML. Defaults to total_risk 0.5, sizes [0.5, 0.25, 0.15, 0.10].
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the plan as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Strategy config commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML with its fingerprint.
    Show {
        /// Strategy config TOML. Without it the defaults are shown.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            side,
            range,
            take_profits,
            stop_loss,
            price,
            balance,
            precision,
            tick_size,
            config,
            json,
        } => {
            let precision = resolve_precision(precision, tick_size)?;
            let request = PlanRequest {
                side,
                entry_range: parse_range(&range)?,
                take_profit_prices: take_profits,
                stop_loss_price: stop_loss,
                current_price: price,
                balance,
                precision,
            };
            run_plan(config.as_deref(), &request, json)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { config } => run_config_show(config.as_deref()),
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<StrategyConfig> {
    match path {
        Some(path) => StrategyConfig::from_file(path)
            .with_context(|| format!("loading strategy config {}", path.display())),
        None => Ok(StrategyConfig::default()),
    }
}

fn resolve_precision(precision: Option<u32>, tick_size: Option<f64>) -> Result<u32> {
    match (precision, tick_size) {
        (Some(p), _) => Ok(p),
        (None, Some(tick)) => Ok(precision_for_tick(tick)?),
        (None, None) => bail!("one of --precision or --tick-size is required"),
    }
}

fn parse_range(values: &[f64]) -> Result<PriceRange> {
    match values {
        [low, high] => Ok(PriceRange::new(*low, *high)),
        _ => bail!("--range takes exactly two prices, got {}", values.len()),
    }
}

fn run_plan(config_path: Option<&Path>, request: &PlanRequest, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let fingerprint = config.fingerprint();
    let builder = DynamicGradientEntry::new(config)?;
    info!(
        "building {} plan with config {}",
        request.side,
        fingerprint.short()
    );

    let plan = builder.build_plan(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(&plan, request, builder.num_orders(), fingerprint.short());
    Ok(())
}

fn run_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("# fingerprint: {}", config.fingerprint());
    print!("{}", config.to_toml()?);
    Ok(())
}

fn print_plan(plan: &OrderPlan, request: &PlanRequest, num_orders: usize, fingerprint: &str) {
    let precision = request.precision as usize;

    println!();
    println!("=== Order Plan ===");
    println!("Side:           {}", request.side);
    println!("Entry range:    {}", request.entry_range);
    println!("Current price:  {}", request.current_price);
    println!("Balance:        {}", request.balance);
    println!("Config:         {fingerprint}");
    println!();
    print_ladder("Entries", &plan.entries, precision);
    print_ladder("Take-profits", &plan.take_profits, precision);
    println!("--- Stop-loss ---");
    println!(
        "{:>14.prec$} {:>14.2}",
        plan.stop_loss.price,
        plan.stop_loss.size,
        prec = precision
    );
    println!();
    println!("Total entry size:       {:.2}", plan.total_entry_size());
    println!("Total take-profit size: {:.2}", plan.total_take_profit_size());
    if let Some(avg) = plan.average_entry_price() {
        println!("Avg entry price:        {avg:.prec$}", prec = precision);
    }
    if !plan.is_complete(num_orders) {
        println!();
        println!(
            "WARNING: {} take-profit price(s) for {num_orders} orders; take-profit ladder truncated",
            request.take_profit_prices.len()
        );
    }
    println!();
}

fn print_ladder(title: &str, lines: &[OrderLine], precision: usize) {
    println!("--- {title} ---");
    println!("{:>14} {:>14}", "Price", "Size");
    println!("{}", "-".repeat(29));
    for line in lines {
        println!(
            "{:>14.prec$} {:>14.2}",
            line.price,
            line.size,
            prec = precision
        );
    }
    println!();
}
