//! NFL Stats API Library
//!
//! Scrapes conference standings from a stats page, groups them by division
//! and renders them as HTML, caching the result for a bounded time.
//!
//! - `data` - Standings models, page source and extraction
//! - `render` - HTML and plain-text output
//! - `cache` - In-memory TTL cache for rendered pages
//! - `service` - The fetch, extract, render and cache pipeline
//! - `server` - HTTP routes
//! - `config` / `cli` - Environment and command-line settings

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod render;
pub mod server;
pub mod service;
