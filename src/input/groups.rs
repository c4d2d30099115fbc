use std::path::Path;

use crate::input::InputError;
use crate::input::reader::for_each_line;

/// One `id \t gene \t gene ...` line of a pathway or paralog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub id: String,
    pub genes: Vec<String>,
}

pub fn read_group_file(path: &Path) -> Result<Vec<GroupRecord>, InputError> {
    let mut records = Vec::new();
    for_each_line(path, |_, line| {
        records.push(parse_group_line(line));
        Ok(())
    })?;
    Ok(records)
}

pub fn parse_group_line(line: &str) -> GroupRecord {
    let mut fields = line.split('\t');
    let id = fields.next().unwrap_or_default().to_string();
    let mut genes: Vec<String> = Vec::new();
    for gene in fields {
        if gene.is_empty() || genes.iter().any(|g| g == gene) {
            continue;
        }
        genes.push(gene.to_string());
    }
    GroupRecord { id, genes }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/groups.rs"]
mod tests;
