pub mod backup;
pub mod config;
pub mod db;
pub mod edit;
pub mod entry;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
