// ABOUTME: Live workout session domain: circuit expansion and in-progress session state
// ABOUTME: Re-exports the expansion transform, id source, and session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Live workout sessions
//!
//! Starting a session from a program runs the circuit expansion transform
//! (`expansion::expand`); the resulting instances are held in an
//! [`ActiveSession`] inside the [`SessionStore`] until finished or
//! cancelled.

/// Circuit/superset expansion transform
pub mod expansion;

/// In-progress session state and mutations
pub mod tracker;

pub use expansion::{expand, IdSource, RandomIds};
pub use tracker::{ActiveSession, SessionStore, SetUpdate};
