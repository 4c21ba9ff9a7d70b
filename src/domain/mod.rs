//! Domain layer containing the gym's business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, calendar formats, events, errors)
//! - `catalog` - Session kinds, forum policies and scheduled sessions
//! - `people` - Persons and the roles they hold
//! - `gym` - The gym aggregate, its action log and domain events
//! - `enrollment` - Session enrollment checks and outcomes
//! - `notification` - Message delivery to client mailboxes

pub mod catalog;
pub mod enrollment;
pub mod foundation;
pub mod gym;
pub mod notification;
pub mod people;
