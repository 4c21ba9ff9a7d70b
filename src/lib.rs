//! Gym Management - Session enrollment for a single fitness facility
//!
//! A secretary registers clients, hires instructors and schedules sessions.
//! Clients pay per session, and every administrative action is recorded in
//! the gym's action log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
