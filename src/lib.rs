pub mod config;
pub mod controller;
pub mod entry;
pub mod error;
pub mod grading;
pub mod output;
pub mod samples;
pub mod store;
pub mod summary;
