// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Porchlight Nav: a deterministic, `no_std` interaction controller for site navigation bars.
//!
//! ## Overview
//!
//! A navigation bar with dropdown panels has a small amount of genuinely fiddly
//! behavior: panels open on hover but must survive the pointer crossing the gap
//! to them, taps must work where hover never fires, presses elsewhere dismiss,
//! and links either scroll in place or leave the page depending on where you are.
//! This crate keeps all of that in one owned [`NavController`](crate::controller::NavController)
//! and draws nothing.
//!
//! ## Collaborators
//!
//! The controller reaches the outside world only through traits in [`host`]:
//! a [`Navigator`](crate::host::Navigator) for page transitions and scrolling,
//! a [`ThemeProvider`](crate::host::ThemeProvider), an
//! [`EventSurface`](crate::host::EventSurface) for process-wide listeners, and a
//! [`Scheduler`](crate::timer::Scheduler) for the delayed close.
//!
//! ## Workflow
//!
//! 1) Build a [`NavMenu`](crate::types::NavMenu) and a [`NavConfig`](crate::config::NavConfig).
//! 2) Create the controller and [`mount`](crate::controller::NavController::mount) it.
//! 3) Forward input. Hosts with per-element events call the `on_pointer_*` methods
//!    directly; hosts with only raw positions register trigger and panel regions and
//!    call [`on_pointer_move`](crate::controller::NavController::on_pointer_move).
//! 4) Deliver fired timers to [`on_timer`](crate::controller::NavController::on_timer).
//! 5) Render from [`state`](crate::controller::NavController::state).
//!
//! ## Logging
//!
//! State transitions are reported through `tracing` at `debug`; ignored input
//! (unknown items, stale timers, missing scroll targets) at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod host;
pub mod hover;
pub mod resolve;
pub mod state;
pub mod timer;
pub mod types;
