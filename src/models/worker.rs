/// A `(worker_id, name)` pair as it appears in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRef {
    pub worker_id: String,
    pub name: String,
}

impl WorkerRef {
    pub fn new(worker_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            name: name.into(),
        }
    }
}
