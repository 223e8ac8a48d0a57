//! Core configuration and data types shared across the worker

pub mod config;
pub mod models;
