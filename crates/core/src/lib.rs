//! # WhenMeet Core
//!
//! Domain model of the availability poll: how an organizer's date range turns
//! into half-hour slots, how a participant's grid edits become a full set of
//! availability rows, and how all responses reduce to a heat map.
//!
//! Storage is reached only through [`store::EventStore`].

pub mod aggregate;
pub mod controller;
pub mod errors;
pub mod grid;
pub mod models;
pub mod selection;
pub mod service;
pub mod slots;
pub mod store;
