use std::path::PathBuf;

use thiserror::Error;

pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write score line: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("cannot serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fields of the primary tab-separated output record.
#[derive(Debug, Clone)]
pub struct ScoreLine {
    pub normalized_score: f64,
    pub coex_source: String,
    pub direction_label: &'static str,
    pub coex_threshold: f64,
    pub test_gene_count: usize,
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
