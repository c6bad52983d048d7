use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use nf_project::{CompiledRun, OperatorDef, ProjectError, compile, load};
use nf_sim::{DEFAULT_ABUNDANCE_TOL, SimError, check_non_negative};

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "NucleoFlow CLI - Nuclear reaction network integration tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax, references, and conservation
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Summarize the species, reactions, and run settings of a network file
    Info {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Integrate a network to its end time
    Run {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Override the end time from the file's run section
        #[arg(long)]
        t_end: Option<f64>,
        /// Write the per-step abundance history to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("{0}")]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Info { network_path } => cmd_info(&network_path),
        Commands::Run {
            network_path,
            t_end,
            output,
        } => cmd_run(&network_path, t_end, output.as_deref()),
    }
}

fn cmd_validate(network_path: &Path) -> CliResult<()> {
    println!("Validating network: {}", network_path.display());
    let file = load(network_path)?;
    compile(&file)?;
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_info(network_path: &Path) -> CliResult<()> {
    let file = load(network_path)?;

    println!("Network: {} (schema v{})", file.name, file.version);

    println!("\nSpecies:");
    for species in &file.species {
        println!(
            "  {:<8} A={:<3} y0={}",
            species.name, species.mass_number, species.y0
        );
    }

    println!(
        "\nConditions: T9={}  rho={} g/cm^3  V={} cm^3",
        file.conditions.temperature_t9, file.conditions.density_g_cm3, file.conditions.volume_cm3
    );

    if file.reactions.is_empty() {
        println!("\nNo reactions");
    } else {
        println!("\nReactions:");
        for reaction in &file.reactions {
            println!("  {}", reaction.name);
        }
    }

    if !file.operators.is_empty() {
        println!("\nOperators:");
        for operator in &file.operators {
            match operator {
                OperatorDef::MassAction => println!("  mass action"),
                OperatorDef::TwoBody {
                    reactant_i,
                    reactant_j,
                    product_k,
                    rate,
                } => println!(
                    "  two-body: {} + {} -> {} (rate {})",
                    reactant_i, reactant_j, product_k, rate
                ),
                OperatorDef::Decay { lambda } => println!("  decay (lambda {})", lambda),
            }
        }
    }

    println!("\nRun settings:");
    println!("  t_end = {}", file.run.t_end);
    println!(
        "  safety = {}, y_min = {:e}, dt_floor = {:e}, dt_fallback = {:e}",
        file.run.safety, file.run.y_min, file.run.dt_floor, file.run.dt_fallback
    );
    println!(
        "  record_history = {}, clip_to_t_end = {}, max_steps = {}",
        file.run.record_history, file.run.clip_to_t_end, file.run.max_steps
    );
    Ok(())
}

fn cmd_run(network_path: &Path, t_end: Option<f64>, output: Option<&Path>) -> CliResult<()> {
    let mut file = load(network_path)?;
    if let Some(t_end) = t_end {
        file.run.t_end = t_end;
    }
    // The CSV export needs per-step history regardless of the file setting.
    if output.is_some() {
        file.run.record_history = true;
    }

    println!("Running network: {} (t_end = {})", file.name, file.run.t_end);

    let mut compiled = compile(&file)?;
    compiled.run()?;

    let state = compiled.engine().state();
    check_non_negative(state.abundances(), DEFAULT_ABUNDANCE_TOL)?;

    println!(
        "✓ Integration completed: {} steps to t = {:.6}",
        compiled.engine().steps(),
        state.time()
    );
    println!("\nFinal abundances:");
    for (name, value) in state.isotopes().iter().zip(state.abundances().iter()) {
        println!("  {:<8} {:.6e}", name, value);
    }

    if let Some(path) = output {
        let csv = history_csv(&compiled);
        std::fs::write(path, csv)?;
        println!(
            "\n✓ Wrote {} history rows to {}",
            compiled.engine().history().t.len(),
            path.display()
        );
    }

    Ok(())
}

fn history_csv(compiled: &CompiledRun) -> String {
    let mut csv = format!("t,{}\n", compiled.engine().state().isotopes().join(","));
    let history = compiled.engine().history();
    for (t, y) in history.t.iter().zip(&history.y) {
        let row: Vec<String> = y.iter().map(|value| value.to_string()).collect();
        csv.push_str(&format!("{},{}\n", t, row.join(",")));
    }
    csv
}
