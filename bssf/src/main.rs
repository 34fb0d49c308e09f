use std::fs;

use anyhow::{Context, Result};
use bssf::config::BssfConfig;
use bssf::io;
use bssf::io::cli::Cli;
use bssf::io::output::BssfOutput;
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use sheetnest::io::ext_repr::ExtPackingJob;
use sheetnest::packing::batch::{pack_all, pack_all_parallel};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: BssfConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BssfConfig::default()
        }
        Some(config_file) => io::read_json(config_file.as_path())?,
    };

    info!("Successfully parsed BssfConfig: {config:?}");

    let ext_jobs: Vec<ExtPackingJob> = io::read_json(args.input_file.as_path())?;
    let jobs = ext_jobs
        .iter()
        .map(sheetnest::io::import)
        .try_collect::<_, Vec<_>, _>()?;

    info!("[MAIN] packing {} job(s)", jobs.len());

    let outcomes = match config.parallel {
        true => pack_all_parallel(&jobs, config.nest_config),
        false => pack_all(&jobs, config.nest_config).collect_vec(),
    };

    for outcome in &outcomes {
        let result = outcome.result();
        info!(
            "[MAIN] '{}': {} sheet(s), {:.1}% utilization",
            result.name,
            result.sheets_used,
            result.utilization * 100.0
        );
        for u in outcome.unplaced() {
            warn!(
                "[MAIN] '{}': {}x part {} ('{}') could not be placed",
                result.name, u.quantity, u.part_id, u.label
            );
        }
    }

    let output = BssfOutput {
        config,
        results: outcomes.iter().map(sheetnest::io::export).collect_vec(),
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("jobs");
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, solution_path.as_path())?;

    Ok(())
}
