pub mod entry;
pub mod worker;

pub use entry::DailyEntry;
pub use worker::WorkerRef;
