pub mod config;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod theme;
