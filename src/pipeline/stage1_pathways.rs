use std::path::Path;

use crate::input::InputError;
use crate::input::groups::{GroupRecord, read_group_file};
use crate::model::genes::GeneIndex;
use crate::model::relation::PairSet;

pub const MIN_GENES_IN_PATHWAY: usize = 2;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    /// Genes under test: every gene of an admissible pathway.
    pub genes: GeneIndex,
    pub same_pathway: PairSet,
    pub pathways_used: usize,
    pub pathways_skipped: usize,
}

pub fn run_stage1(path: &Path, max_genes_in_pathway: usize) -> Result<Stage1Output, InputError> {
    let records = read_group_file(path)?;
    let out = build_pathway_index(&records, max_genes_in_pathway);

    tracing::info!(
        path = %path.display(),
        test_genes = out.genes.len(),
        "loaded pathways"
    );
    tracing::debug!(
        used = out.pathways_used,
        skipped = out.pathways_skipped,
        same_pathway_pairs = out.same_pathway.len(),
        "pathway size filter"
    );

    Ok(out)
}

pub fn build_pathway_index(records: &[GroupRecord], max_genes_in_pathway: usize) -> Stage1Output {
    let mut genes = GeneIndex::new();
    let mut same_pathway = PairSet::new();
    let mut pathways_used = 0usize;
    let mut pathways_skipped = 0usize;

    for record in records {
        let n = record.genes.len();
        if !(MIN_GENES_IN_PATHWAY..=max_genes_in_pathway).contains(&n) {
            pathways_skipped += 1;
            continue;
        }
        pathways_used += 1;

        let ids: Vec<_> = record.genes.iter().map(|g| genes.insert(g)).collect();
        for (i, &g0) in ids.iter().enumerate() {
            for &g1 in &ids[i + 1..] {
                same_pathway.insert(g0, g1);
            }
        }
    }

    Stage1Output {
        genes,
        same_pathway,
        pathways_used,
        pathways_skipped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_pathways.rs"]
mod tests;
