use std::collections::HashMap;

pub type GeneId = u32;

/// Interned set of genes under test. Ids are dense and assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GeneIndex {
    id_by_name: HashMap<String, GeneId>,
    names: Vec<String>,
}

impl GeneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> GeneId {
        if let Some(&id) = self.id_by_name.get(name) {
            return id;
        }
        let id = self.names.len() as GeneId;
        self.names.push(name.to_string());
        self.id_by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<GeneId> {
        self.id_by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/genes.rs"]
mod tests;
