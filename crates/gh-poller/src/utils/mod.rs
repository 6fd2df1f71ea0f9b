pub mod browser;
pub mod relative_time;
