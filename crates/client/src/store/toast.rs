use super::next_id;

/// Timestamp-derived toast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u64,
}

/// Transient notifications in insertion order. No deduplication: the same
/// message pushed twice shows twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlice {
    toasts: Vec<Toast>,
    last_id: u64,
}

impl ToastSlice {
    pub fn push(
        &mut self,
        now_ms: u64,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> ToastId {
        self.last_id = next_id(self.last_id, now_ms);
        let id = ToastId(self.last_id);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            duration_ms,
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
