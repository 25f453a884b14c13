// src/fetch/mod.rs
pub mod csv;
pub mod urls;
