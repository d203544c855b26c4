use shared_types::AppError;

/// Identifies one dispatched request against an [`AsyncResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Remote data with its request status: the `{ data, loading, error }`
/// triple every slice follows.
///
/// Only the most recently issued ticket may settle the resource. A response
/// for an older ticket is dropped, so overlapping requests resolve to
/// whatever was dispatched last, not whatever arrived last.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncResource<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            latest: 0,
        }
    }
}

impl<T> AsyncResource<T> {
    /// Mark a request as in flight and issue its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        Ticket(self.latest)
    }

    /// Commit a response. Returns `false` when the ticket is stale and the
    /// response was discarded.
    ///
    /// Success replaces the data and clears the error. Failure keeps the
    /// previous data and records the error's display message.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, AppError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.friendly_message());
            }
        }
        true
    }

    /// Give up on a request that will never settle. Clears `loading` if the
    /// ticket is still the latest; data and error are left as they were.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        true
    }

    /// Back to the initial empty state. Tickets issued before the reset
    /// can no longer settle.
    pub fn reset(&mut self) {
        let latest = self.latest;
        *self = Self::default();
        self.latest = latest + 1;
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }
}
