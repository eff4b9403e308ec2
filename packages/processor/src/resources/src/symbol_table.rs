use super::id::AndroidResourceId;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Read-only lookup from a resource constant to its identity.
///
/// Populated once from the compilation's generated resource symbols, then
/// only queried for the rest of the pass. Both the numeric constant and the
/// qualified symbol name index the same entries.
#[derive(Debug, Default)]
pub struct ResourceSymbolTable {
    by_name: IndexMap<String, usize>,
    by_value: HashMap<i64, usize>,
    entries: Vec<AndroidResourceId>,
}

impl ResourceSymbolTable {
    pub fn new() -> Self {
        ResourceSymbolTable::default()
    }

    pub fn insert(&mut self, id: AndroidResourceId) {
        let index = self.entries.len();
        self.by_name.insert(id.code.clone(), index);
        self.by_value.insert(id.value, index);
        self.entries.push(id);
    }

    pub fn lookup_value(&self, value: i64) -> Option<&AndroidResourceId> {
        self.by_value.get(&value).map(|&i| &self.entries[i])
    }

    pub fn lookup_name(&self, code: &str) -> Option<&AndroidResourceId> {
        self.by_name.get(code).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AndroidResourceId> for ResourceSymbolTable {
    fn from_iter<I: IntoIterator<Item = AndroidResourceId>>(iter: I) -> Self {
        let mut table = ResourceSymbolTable::new();
        for id in iter {
            table.insert(id);
        }
        table
    }
}
