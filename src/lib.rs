// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for an iTunes-style music catalog search API.
//!
//! This crate provides a small typed client for the catalog search endpoint:
//! it builds a percent-encoded search URL for a term and media kind, issues
//! an HTTP GET, and decodes the JSON `results` array into [`Album`] and
//! [`Track`] records.

pub mod client;
pub mod error;
pub mod models;

pub use client::MelodyClient;
pub use error::{MelodyError, Result};
pub use models::{Album, Artist, Entity, SearchResponse, Track};
