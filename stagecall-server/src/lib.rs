/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Stagecall signaling server library.
//!
//! This crate provides the Axum router, application state, archive backend
//! and configuration for the signaling server that host and participant
//! pages talk to. The binary entry point (`main.rs`) is a thin wrapper that
//! calls into this library.

pub mod backend;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
