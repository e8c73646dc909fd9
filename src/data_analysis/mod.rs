// src/data_analysis/mod.rs

pub mod normalization;
pub mod report_matrix;
pub mod statistics;

// src/data_analysis/mod.rs
