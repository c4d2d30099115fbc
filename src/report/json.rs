use serde::Serialize;

use crate::model::pairs::Totals;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryInputs {
    pub coex_dir: String,
    pub pathway_file: String,
    pub paralog_file: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryConfig {
    pub direction: &'static str,
    pub fpr_bound: f64,
    pub max_genes_in_pathway: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryCounts {
    pub test_genes: usize,
    pub pathways_used: usize,
    pub pathways_skipped: usize,
    pub paralog_genes: usize,
    pub files_read: usize,
    pub files_skipped: usize,
    pub pairs: usize,
    pub paralog_excluded: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryScore {
    pub normalized_score: f64,
    pub pauc: f64,
    pub coex_threshold: f64,
    pub threshold_fp: f64,
    pub crossed: bool,
    pub stop_rank: usize,
    pub fp_at_stop: f64,
    pub tp_at_stop: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: &'static str,
    pub version: &'static str,
    pub inputs: SummaryInputs,
    pub config: SummaryConfig,
    pub counts: SummaryCounts,
    pub totals: Totals,
    pub score: SummaryScore,
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
