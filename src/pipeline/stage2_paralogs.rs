use std::collections::HashMap;
use std::path::Path;

use crate::input::InputError;
use crate::input::groups::{GroupRecord, read_group_file};
use crate::model::genes::{GeneId, GeneIndex};

/// Paralog group assignment for test genes. A gene listed in several
/// qualifying groups keeps the last one read.
#[derive(Debug, Clone, Default)]
pub struct ParalogGroups {
    group_by_gene: Vec<Option<u32>>,
    group_ids: Vec<String>,
    pub reassigned: usize,
}

impl ParalogGroups {
    pub fn empty(n_genes: usize) -> Self {
        Self {
            group_by_gene: vec![None; n_genes],
            group_ids: Vec::new(),
            reassigned: 0,
        }
    }

    fn group(&self, gene: GeneId) -> Option<u32> {
        self.group_by_gene.get(gene as usize).copied().flatten()
    }

    pub fn same_group(&self, a: GeneId, b: GeneId) -> bool {
        match (self.group(a), self.group(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    pub fn n_groups(&self) -> usize {
        self.group_ids.len()
    }

    pub fn n_mapped(&self) -> usize {
        self.group_by_gene.iter().filter(|g| g.is_some()).count()
    }
}

pub fn run_stage2(path: Option<&Path>, genes: &GeneIndex) -> Result<ParalogGroups, InputError> {
    let Some(path) = path else {
        tracing::info!("no paralog file configured; paralog exclusion disabled");
        return Ok(ParalogGroups::empty(genes.len()));
    };

    let records = read_group_file(path)?;
    let groups = build_paralog_groups(&records, genes);

    tracing::info!(
        path = %path.display(),
        paralog_genes = groups.n_mapped(),
        groups = groups.n_groups(),
        "loaded paralog groups"
    );
    if groups.reassigned > 0 {
        tracing::debug!(
            reassigned = groups.reassigned,
            "genes listed in several paralog groups keep the last group"
        );
    }

    Ok(groups)
}

pub fn build_paralog_groups(records: &[GroupRecord], genes: &GeneIndex) -> ParalogGroups {
    let mut out = ParalogGroups::empty(genes.len());
    let mut group_by_id: HashMap<&str, u32> = HashMap::new();

    for record in records {
        let members: Vec<GeneId> = record.genes.iter().filter_map(|g| genes.get(g)).collect();
        if members.len() < 2 {
            continue;
        }
        let group = *group_by_id.entry(record.id.as_str()).or_insert_with(|| {
            out.group_ids.push(record.id.clone());
            (out.group_ids.len() - 1) as u32
        });
        for gene in members {
            let slot = &mut out.group_by_gene[gene as usize];
            if slot.is_some() {
                out.reassigned += 1;
            }
            *slot = Some(group);
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_paralogs.rs"]
mod tests;
