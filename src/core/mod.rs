pub mod backup;
pub mod config;
pub mod editor;
pub mod ingest;
pub mod log;
pub mod report;
