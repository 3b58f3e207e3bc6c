//! Concrete adapter implementations

pub mod json_file;
