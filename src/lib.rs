//! Subscriptions Service - Subscription records and spending totals
//!
//! A REST API for recording which services a user pays for, over which
//! months, and how much a service cost a user over a period.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
