use std::collections::HashSet;
use uuid::Uuid;

/// Which rows of a screen's table are expanded
#[derive(Debug, Clone, Default)]
pub struct TableView {
    expanded: HashSet<Uuid>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a row; returns whether it is expanded afterwards
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Forget rows that are no longer in the list
    pub fn retain(&mut self, live: &[Uuid]) {
        self.expanded.retain(|id| live.contains(id));
    }
}
