// src/lib.rs

//! Prismiq job aggregation library

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
