mod config;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

use std::io::Write;

use clap::Parser;
use thiserror::Error;

use crate::config::{Cli, Command, ConfigError, RunConfig};
use crate::input::InputError;
use crate::pipeline::stage1_pathways::run_stage1;
use crate::pipeline::stage2_paralogs::run_stage2;
use crate::pipeline::stage3_pairs::run_stage3;
use crate::pipeline::stage4_pauc::{PaucResult, ScoreError, Stage4Params, run_stage4};
use crate::pipeline::stage5_report::{Stage5Input, run_stage5};
use crate::report::ReportError;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    let Command::Score(args) = cli.command;

    let result = RunConfig::try_from(args)
        .map_err(RunError::from)
        .and_then(|config| run(&config, &mut std::io::stdout().lock()));
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<PaucResult, RunError> {
    let pathways = run_stage1(&config.pathway_file, config.max_genes_in_pathway)?;
    let paralogs = run_stage2(config.paralog_file.as_deref(), &pathways.genes)?;
    let pairs = run_stage3(&config.coex_dir, &pathways, &paralogs)?;

    let result = run_stage4(
        &pairs.records,
        pairs.totals,
        &Stage4Params {
            fpr: config.fpr_bound,
            direction: config.direction,
        },
    )?;
    tracing::info!(
        score = result.normalized_score,
        coex_threshold = result.coex_threshold,
        "partial AUC computed"
    );

    run_stage5(
        &Stage5Input {
            config,
            pathways: &pathways,
            paralogs: &paralogs,
            pairs: &pairs,
            result: &result,
        },
        out,
    )?;

    Ok(result)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
