use serde::{Deserialize, Serialize};

/// One recorded day of work for one worker.
///
/// Every field is kept as text, the way it was pasted: `achieved` can be a
/// score (`"7"`, `"7.5"`) or a free-form note, and `worker_id` is an
/// identifier, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub worker_id: String,  // ⇔ daily.worker_id
    pub name: String,       // ⇔ daily.name
    pub role: String,       // ⇔ daily.role
    pub work: String,       // ⇔ daily.work
    pub category: String,   // ⇔ daily.category
    pub target: String,     // ⇔ daily.target (empty on ingestion)
    pub achieved: String,   // ⇔ daily.achieved
    pub entry_date: String, // ⇔ daily.entry_date (TEXT "YYYY-MM-DD")
}
