use crate::mach::{Address, Val};
use std::rc::Rc;

/// ## Declared names
///
/// Entries are never removed. Scoping is a stack of indices into the
/// declaration history; leaving a block truncates it back to a `Snapshot`.

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Constant {
        name: Rc<str>,
        value: Val,
    },
    Variable {
        name: Rc<str>,
        level: usize,
        offset: usize,
    },
    Procedure {
        name: Rc<str>,
        level: usize,
        address: Address,
        size: usize,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Constant { name, .. }
            | Entry::Variable { name, .. }
            | Entry::Procedure { name, .. } => name,
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Entry::Constant { name, value } => write!(f, "CONST {} = {}", name, value),
            Entry::Variable {
                name,
                level,
                offset,
            } => write!(f, "VAR {} LEVEL {} OFFSET {}", name, level, offset),
            Entry::Procedure {
                name,
                level,
                address,
                size,
            } => write!(
                f,
                "PROCEDURE {} LEVEL {} ADDRESS {} SIZE {}",
                name, level, address, size
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Entry>,
    visible: Vec<usize>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    fn enter(&mut self, entry: Entry) -> usize {
        let index = self.entries.len();
        self.entries.push(entry);
        self.visible.push(index);
        index
    }

    pub fn enter_constant(&mut self, name: Rc<str>, value: Val) -> usize {
        self.enter(Entry::Constant { name, value })
    }

    pub fn enter_variable(&mut self, name: Rc<str>, level: usize, offset: usize) -> usize {
        self.enter(Entry::Variable {
            name,
            level,
            offset,
        })
    }

    /// Address and size are patched once the body has been compiled.
    pub fn enter_procedure(&mut self, name: Rc<str>, level: usize) -> usize {
        self.enter(Entry::Procedure {
            name,
            level,
            address: 0,
            size: 0,
        })
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.visible
            .iter()
            .rev()
            .find(|index| self.entries[**index].name() == name)
            .copied()
    }

    pub fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entry_at_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn mark(&self) -> Snapshot {
        Snapshot(self.visible.len())
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.visible.truncate(snapshot.0);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadowing() {
        let mut table = SymbolTable::new();
        let outer = table.enter_variable("x".into(), 0, 3);
        let mark = table.mark();
        let inner = table.enter_constant("x".into(), 7);
        assert_eq!(table.position("x"), Some(inner));
        table.restore(mark);
        assert_eq!(table.position("x"), Some(outer));
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown() {
        let mut table = SymbolTable::new();
        assert_eq!(table.position("a"), None);
        table.enter_constant("b".into(), 1);
        assert_eq!(table.position("a"), None);
        assert_eq!(table.position("B"), None);
    }

    #[test]
    fn test_procedure_patch() {
        let mut table = SymbolTable::new();
        let index = table.enter_procedure("p".into(), 0);
        if let Some(Entry::Procedure { address, size, .. }) = table.entry_at_mut(index) {
            *address = 12;
            *size = 4;
        }
        assert_eq!(
            table.entry_at(index).map(|e| e.to_string()),
            Some("PROCEDURE p LEVEL 0 ADDRESS 12 SIZE 4".to_string())
        );
    }

    #[test]
    fn test_nested_restore() {
        let mut table = SymbolTable::new();
        table.enter_variable("a".into(), 0, 3);
        let outer = table.mark();
        table.enter_procedure("p".into(), 0);
        let inner = table.mark();
        table.enter_variable("b".into(), 1, 3);
        assert!(table.position("a").is_some());
        table.restore(inner);
        assert_eq!(table.position("b"), None);
        assert!(table.position("p").is_some());
        table.restore(outer);
        assert_eq!(table.position("p"), None);
        assert_eq!(table.entries().len(), 3);
    }
}
