//! Report aggregation and export for the training academy administration.
//!
//! A report request runs a fixed set of aggregation queries ([`query`]),
//! turns the raw rows into titled display tables ([`shaping`]) and renders
//! those tables as an Excel workbook, a PDF or an interactive HTML listing
//! ([`render`]). The [`api`] module exposes it all over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod shaping;

#[cfg(test)]
mod test_support;
