use std::fs;
use std::io::Write;

use crate::config::RunConfig;
use crate::pipeline::stage1_pathways::Stage1Output;
use crate::pipeline::stage2_paralogs::ParalogGroups;
use crate::pipeline::stage3_pairs::Stage3Output;
use crate::pipeline::stage4_pauc::PaucResult;
use crate::report::json::{
    SummaryConfig, SummaryCounts, SummaryData, SummaryInputs, SummaryScore, render_summary_json,
};
use crate::report::text::render_score_line;
use crate::report::{ReportError, ScoreLine};

#[derive(Debug, Clone, Copy)]
pub struct Stage5Input<'a> {
    pub config: &'a RunConfig,
    pub pathways: &'a Stage1Output,
    pub paralogs: &'a ParalogGroups,
    pub pairs: &'a Stage3Output,
    pub result: &'a PaucResult,
}

pub fn build_score_line(input: &Stage5Input<'_>) -> ScoreLine {
    ScoreLine {
        normalized_score: input.result.normalized_score,
        coex_source: input.config.coex_dir.display().to_string(),
        direction_label: input.config.direction.label(),
        coex_threshold: input.result.coex_threshold,
        test_gene_count: input.pathways.genes.len(),
    }
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let cfg = input.config;
    SummaryData {
        tool: "kira-coexauc",
        version: env!("CARGO_PKG_VERSION"),
        inputs: SummaryInputs {
            coex_dir: cfg.coex_dir.display().to_string(),
            pathway_file: cfg.pathway_file.display().to_string(),
            paralog_file: cfg.paralog_file.as_ref().map(|p| p.display().to_string()),
        },
        config: SummaryConfig {
            direction: cfg.direction.label(),
            fpr_bound: cfg.fpr_bound,
            max_genes_in_pathway: cfg.max_genes_in_pathway,
        },
        counts: SummaryCounts {
            test_genes: input.pathways.genes.len(),
            pathways_used: input.pathways.pathways_used,
            pathways_skipped: input.pathways.pathways_skipped,
            paralog_genes: input.paralogs.n_mapped(),
            files_read: input.pairs.stats.files_read,
            files_skipped: input.pairs.stats.files_skipped,
            pairs: input.pairs.records.len(),
            paralog_excluded: input.pairs.stats.excluded,
        },
        totals: input.pairs.totals,
        score: SummaryScore {
            normalized_score: input.result.normalized_score,
            pauc: input.result.pauc,
            coex_threshold: input.result.coex_threshold,
            threshold_fp: input.result.threshold_fp,
            crossed: input.result.crossed,
            stop_rank: input.result.stop_rank,
            fp_at_stop: input.result.x_at_stop,
            tp_at_stop: input.result.y_at_stop,
        },
    }
}

/// Writes the optional JSON summary, then the score line to `out`.
pub fn run_stage5<W: Write>(input: &Stage5Input<'_>, out: &mut W) -> Result<(), ReportError> {
    if let Some(path) = &input.config.summary_json {
        let json = render_summary_json(&build_summary(input))?;
        fs::write(path, json).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote run summary");
    }

    let line = render_score_line(&build_score_line(input));
    out.write_all(line.as_bytes())
        .and_then(|_| out.flush())
        .map_err(ReportError::Stdout)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
