pub mod config;
pub mod observers;
pub mod storage;
pub mod theme;
