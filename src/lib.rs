//! Housing search filter.
//!
//! [`filter::FilterSession`] collects the user's answers and turns them into a
//! [`filter::RequestPayload`]; [`search::ResultRetriever`] runs that payload
//! against the property list endpoint and [`search::ResultsView`] holds what
//! gets shown.

pub mod config;
pub mod filter;
pub mod models;
pub mod routes;
pub mod search;
