//! Pay Package Engine for healthcare staffing assignments
//!
//! This crate derives the weekly and contract figures of a staffing pay package
//! (gross pay, agency revenue, agency cost, margin and an estimated net paycheck)
//! from an assignment's rates, stipends and burdens, and wraps that calculation
//! in storage, notification and HTTP layers.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod storage;
pub mod summary;
