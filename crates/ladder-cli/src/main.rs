use anyhow::Context;
use clap::Parser;
use ladder_algo::OptimalResults;
use ladder_cli::{cli::Cli, prompt, term};
use ladder_core::sequence_to_short_form;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("setting default tracing subscriber failed");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let matrix = match &cli.csv_path {
        Some(path) => {
            ladder_io::load_csv(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => match prompt::prompt_csv_path()? {
            Some(matrix) => matrix,
            None => return Ok(()), // Ctrl-D: user-initiated escape
        },
    };

    let k = match cli.k {
        Some(k) => k,
        None => match prompt::prompt_k()? {
            Some(k) => k,
            None => return Ok(()),
        },
    };

    info!(num_tenors = matrix.num_tenors(), num_months = matrix.num_months(), k, "running optimiser");
    let results = ladder_algo::get_optimal_sequences(&matrix, k)?;
    print_results(&results);

    let export_dir = match &cli.export_dir {
        Some(dir) => Some(dir.clone()),
        None => prompt::prompt_export()?,
    };

    if let Some(dir) = export_dir {
        let path = ladder_io::write_results(&dir, &results, cli.verbose_actions)
            .with_context(|| format!("writing results to {}", dir.display()))?;
        println!("Wrote results to {}", path.display());
    }

    Ok(())
}

fn print_results(results: &OptimalResults) {
    for (rank, (crf, path)) in results.crfs.iter().zip(results.paths.iter()).enumerate() {
        let pct = 100.0 * crf - 100.0;
        let line = format!("{:>3}: {:>7.2}%  {}", rank + 1, pct, sequence_to_short_form(path));
        if rank == 0 {
            println!("{}", term::emphasize(&line));
        } else {
            println!("{line}");
        }
    }
}
