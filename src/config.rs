use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::model::pairs::Direction;

pub const DEFAULT_FPR: f64 = 0.01;
pub const DEFAULT_MAX_GENES_IN_PATHWAY: usize = 50;

#[derive(Debug, Parser)]
#[command(
    name = "kira-coexauc",
    version,
    about = "Score gene coexpression data by partial AUC against pathway co-membership."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the normalized pAUC for one coexpression directory
    Score(ScoreArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Directory with one coexpression file per gene (file name = gene id)
    #[arg(long)]
    pub coex_dir: PathBuf,

    /// Pathway annotation: `pathwayID<TAB>gene<TAB>gene...`
    #[arg(long = "pathways")]
    pub pathway_file: PathBuf,

    /// Paralog groups: `groupID<TAB>gene<TAB>gene...`; pairs within a group are excluded
    #[arg(long = "paralogs")]
    pub paralog_file: Option<PathBuf>,

    /// Rank smaller coexpression values first (e.g. distances, ranks)
    #[arg(long)]
    pub smaller_is_better: bool,

    /// False-positive-rate bound of the integration window, in (0, 1]
    #[arg(long = "fpr", default_value_t = DEFAULT_FPR)]
    pub fpr_bound: f64,

    /// Largest pathway kept; pathways with fewer than 2 genes are always dropped
    #[arg(long = "max-pathway-genes", default_value_t = DEFAULT_MAX_GENES_IN_PATHWAY)]
    pub max_genes_in_pathway: usize,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--fpr must be in (0, 1], got {0}")]
    FprOutOfRange(f64),
    #[error("--max-pathway-genes must be at least 2, got {0}")]
    MaxGenesTooSmall(usize),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub coex_dir: PathBuf,
    pub pathway_file: PathBuf,
    pub paralog_file: Option<PathBuf>,
    pub direction: Direction,
    pub fpr_bound: f64,
    pub max_genes_in_pathway: usize,
    pub summary_json: Option<PathBuf>,
}

impl TryFrom<ScoreArgs> for RunConfig {
    type Error = ConfigError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        if !(args.fpr_bound > 0.0 && args.fpr_bound <= 1.0) {
            return Err(ConfigError::FprOutOfRange(args.fpr_bound));
        }
        if args.max_genes_in_pathway < 2 {
            return Err(ConfigError::MaxGenesTooSmall(args.max_genes_in_pathway));
        }
        Ok(RunConfig {
            coex_dir: args.coex_dir,
            pathway_file: args.pathway_file,
            paralog_file: args.paralog_file,
            direction: Direction::from_smaller_is_better(args.smaller_is_better),
            fpr_bound: args.fpr_bound,
            max_genes_in_pathway: args.max_genes_in_pathway,
            summary_json: args.summary_json,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
