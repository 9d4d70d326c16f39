use contracts::domain::v004_specification::SpecificationRecord;
use std::collections::HashMap;

/// SelectionStore keeps per-sheet specification records across sheet switches.
/// Records are stored in memory and persist when switching between TagNo
/// sheets; absence of an entry is distinct from an all-empty entry.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    records: HashMap<i64, SpecificationRecord>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn get(&self, sheet_id: i64) -> Option<&SpecificationRecord> {
        self.records.get(&sheet_id)
    }

    pub fn contains(&self, sheet_id: i64) -> bool {
        self.records.contains_key(&sheet_id)
    }

    pub fn put(&mut self, sheet_id: i64, record: SpecificationRecord) {
        self.records.insert(sheet_id, record);
    }

    /// Зафиксировать рабочую копию. Запись клонируется: хранимый экземпляр
    /// никогда не является живой рабочей копией.
    pub fn commit_working_copy(&mut self, sheet_id: i64, working_copy: &SpecificationRecord) {
        self.records.insert(sheet_id, working_copy.clone());
    }

    pub fn remove(&mut self, sheet_id: i64) {
        self.records.remove(&sheet_id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::CodeLabel;

    #[test]
    fn test_commit_stores_a_clone_not_the_working_copy() {
        let mut store = SelectionStore::new();
        let mut working = SpecificationRecord::initial();
        working.body.material = CodeLabel::new("3", "SUS316");
        store.commit_working_copy(1, &working);

        // Дальнейшие правки рабочей копии не видны в store до нового commit
        working.body.material = CodeLabel::new("4", "SCS14A");
        assert_eq!(store.get(1).unwrap().body.material.code, "3");
    }

    #[test]
    fn test_absent_entry_differs_from_empty_entry() {
        let mut store = SelectionStore::new();
        assert!(store.get(1).is_none());
        store.put(1, SpecificationRecord::initial());
        assert!(store.get(1).is_some());
    }
}
