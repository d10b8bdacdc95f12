//! Core domain types
//!
//! This module contains the domain structures shared between the status API
//! client and the poller: the review-status enumeration with its verdict
//! table, and the validated homework record decoded from the API payload.

pub mod homework;
