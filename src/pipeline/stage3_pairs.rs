use std::path::Path;

use crate::input::InputError;
use crate::input::coexpr::{for_each_entry, list_gene_files, parse_value};
use crate::model::genes::GeneId;
use crate::model::pairs::{PairRecord, Totals};
use crate::model::relation::PairSet;
use crate::pipeline::stage1_pathways::Stage1Output;
use crate::pipeline::stage2_paralogs::ParalogGroups;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub files_read: usize,
    pub files_skipped: usize,
    pub excluded: usize,
}

/// Per-run accumulator for pair collection. One per invocation.
#[derive(Debug, Default)]
pub struct RunContext {
    seen: PairSet,
    next_sequence_id: u64,
    pub records: Vec<PairRecord>,
    pub totals: Totals,
    pub stats: CollectStats,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the unordered pair unless it is a self-pair or already seen.
    /// `value` is only evaluated for new pairs.
    pub fn record_pair<F>(
        &mut self,
        g0: GeneId,
        g1: GeneId,
        pathways: &PairSet,
        paralogs: &ParalogGroups,
        value: F,
    ) -> Result<bool, InputError>
    where
        F: FnOnce() -> Result<f64, InputError>,
    {
        if g0 == g1 || self.seen.contains(g0, g1) {
            return Ok(false);
        }
        let value = value()?;
        self.seen.insert(g0, g1);

        let record = PairRecord {
            value,
            is_positive: pathways.contains(g0, g1),
            sequence_id: self.next_sequence_id,
            excluded: paralogs.same_group(g0, g1),
        };
        self.next_sequence_id += 1;
        if record.excluded {
            self.stats.excluded += 1;
        }
        self.totals.count(&record);
        self.records.push(record);
        Ok(true)
    }
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub records: Vec<PairRecord>,
    pub totals: Totals,
    pub stats: CollectStats,
}

pub fn run_stage3(
    coex_dir: &Path,
    pathways: &Stage1Output,
    paralogs: &ParalogGroups,
) -> Result<Stage3Output, InputError> {
    let files = list_gene_files(coex_dir)?;
    let mut ctx = RunContext::new();

    for file in &files {
        let Some(g0) = pathways.genes.get(&file.gene) else {
            ctx.stats.files_skipped += 1;
            continue;
        };
        ctx.stats.files_read += 1;

        for_each_entry(&file.path, |entry| {
            let Some(g1) = pathways.genes.get(entry.partner) else {
                return Ok(());
            };
            ctx.record_pair(g0, g1, &pathways.same_pathway, paralogs, || {
                parse_value(&file.path, entry.line_no, entry.value)
            })?;
            Ok(())
        })?;
    }

    tracing::info!(
        coex_dir = %coex_dir.display(),
        files_read = ctx.stats.files_read,
        pairs = ctx.records.len(),
        total_true = ctx.totals.total_true,
        total_false = ctx.totals.total_false,
        "collected coexpression pairs"
    );
    tracing::debug!(
        files_skipped = ctx.stats.files_skipped,
        paralog_excluded = ctx.stats.excluded,
        "pair collection detail"
    );

    Ok(Stage3Output {
        records: ctx.records,
        totals: ctx.totals,
        stats: ctx.stats,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_pairs.rs"]
mod tests;
