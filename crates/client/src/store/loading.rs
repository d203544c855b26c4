use super::next_id;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingTask {
    pub id: u64,
    pub label: String,
}

/// Requests currently in flight, for global busy indicators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingSlice {
    tasks: Vec<LoadingTask>,
    last_id: u64,
}

impl LoadingSlice {
    pub fn start(&mut self, now_ms: u64, label: impl Into<String>) -> u64 {
        self.last_id = next_id(self.last_id, now_ms);
        self.tasks.push(LoadingTask {
            id: self.last_id,
            label: label.into(),
        });
        self.last_id
    }

    pub fn finish(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn is_busy(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn is_loading(&self, label: &str) -> bool {
        self.tasks.iter().any(|t| t.label == label)
    }

    pub fn tasks(&self) -> &[LoadingTask] {
        &self.tasks
    }

    /// Drop every task but keep the id sequence moving forward.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
