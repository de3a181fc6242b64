// src/lib.rs
pub mod api;
pub mod config;
pub mod parser;
pub mod semantics;
