//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - CLI argument processing
//! - Configuration loading
//! - Data service access over HTTP
//! - OS clipboard

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy_repository;
