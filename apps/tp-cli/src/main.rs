mod case;
mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tp_correlations::{
    Clamond, Colebrook, Correlation, FrictionModel, QualitySweep, SwameeJain, compare,
    sweep_quality,
};

use crate::case::{CaseDef, load_yaml};
use crate::error::{CliError, CliResult};
use crate::report::{EvalReport, sweep_csv};

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "Two-phase frictional pressure drop in pipes", long_about = None)]
struct Cli {
    /// Darcy friction factor model used for the single-phase drops
    #[arg(long, global = true, value_enum, default_value_t = FrictionChoice::Clamond)]
    friction: FrictionChoice,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FrictionChoice {
    Clamond,
    SwameeJain,
    Colebrook,
}

impl FrictionChoice {
    fn model(self) -> Box<dyn FrictionModel> {
        match self {
            FrictionChoice::Clamond => Box::new(Clamond),
            FrictionChoice::SwameeJain => Box::new(SwameeJain),
            FrictionChoice::Colebrook => Box::new(Colebrook::default()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List correlations, their parameters and applicability
    List,
    /// Evaluate the correlation named in a case file
    Eval {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every correlation the case has parameters for
    Compare {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep quality over [0, 1] with the case's correlation
    Sweep {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Number of quality points, endpoints included
        #[arg(long, default_value_t = 21)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let friction = cli.friction.model();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Eval { case_path, json } => cmd_eval(&case_path, friction.as_ref(), json),
        Commands::Compare { case_path, json } => {
            cmd_compare(&case_path, friction.as_ref(), json)
        }
        Commands::Sweep {
            case_path,
            points,
            output,
        } => cmd_sweep(&case_path, friction.as_ref(), points, output.as_deref()),
    }
}

fn cmd_list() -> CliResult<()> {
    let all = Correlation::ALL
        .into_iter()
        .chain([Correlation::Chisholm {
            rough_correction: true,
        }]);
    for c in all {
        let params = c
            .required_params()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<24} {}", c.id(), c.name());
        println!("  params: mass_flow, quality, rho_liquid, {}", params);
        println!("  use:    {}", c.applicability());
    }
    Ok(())
}

fn case_correlation(case: &CaseDef, case_path: &Path) -> CliResult<Correlation> {
    case.correlation()?.ok_or_else(|| CliError::NoCorrelation {
        path: case_path.to_path_buf(),
    })
}

fn cmd_eval(case_path: &Path, friction: &dyn FrictionModel, json: bool) -> CliResult<()> {
    let case = load_yaml(case_path)?;
    let correlation = case_correlation(&case, case_path)?;
    let dp = correlation.evaluate_with(&case.flow_state(), &case.pipe_geometry(), friction)?;

    let report = EvalReport::new(correlation, &Ok(dp));
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_line());
    }
    Ok(())
}

fn cmd_compare(case_path: &Path, friction: &dyn FrictionModel, json: bool) -> CliResult<()> {
    let case = load_yaml(case_path)?;
    let results = compare(&case.flow_state(), &case.pipe_geometry(), friction);
    let reports = results
        .iter()
        .map(|(c, r)| EvalReport::new(*c, r))
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    if reports.is_empty() {
        println!("No correlation has all of its parameters in this case");
    }
    for report in &reports {
        println!("{}", report.to_line());
    }
    Ok(())
}

fn cmd_sweep(
    case_path: &Path,
    friction: &dyn FrictionModel,
    points: usize,
    output: Option<&Path>,
) -> CliResult<()> {
    let case = load_yaml(case_path)?;
    let correlation = case_correlation(&case, case_path)?;
    let sweep = QualitySweep::full(points)?;
    let result = sweep_quality(
        correlation,
        &case.flow_state(),
        &case.pipe_geometry(),
        friction,
        &sweep,
    );
    let csv = sweep_csv(&result);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} points ({} failed) to {}",
            result.qualities.len(),
            result.num_failed(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}
