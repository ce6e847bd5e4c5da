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

//! Shared wire types for the stagecall signaling server.
//!
//! This crate defines the contract between the signaling server, the REST
//! client and the focus/layout coordinator running in each participant's page.
//! It does not depend on axum, reqwest or tokio.

pub mod error;
pub mod layout;
pub mod requests;
pub mod responses;
pub mod signal;

pub use error::APIError;
pub use layout::{LayoutMode, OutputMode};
pub use responses::APIResponse;
pub use signal::StageSignal;
