//! Hwbot Core
//!
//! Core types for the homework status bot.
//!
//! This crate contains:
//! - Domain types: review statuses, the verdict table, homework records
//! - Response decoding: explicit shape validation of the status API payload

pub mod domain;
