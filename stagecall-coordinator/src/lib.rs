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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Focus and layout coordination for stagecall video pages.
//!
//! A page publishes its camera, subscribes to every remote stream, keeps one
//! stream in focus and arranges the stream elements horizontally or
//! vertically. The video SDK owns media and the session; this crate owns the
//! state on top of it:
//!
//! - which participant holds focus (zero or one at any time),
//! - the layout mode and the resulting element order and offsets,
//! - whether the session is being archived, and which recording controls show.
//!
//! Changes made on one page are broadcast to the others as session signals
//! (`focusStream`, `layoutClass`) and reported to the signaling server as
//! best-effort HTTP requests.
//!
//! # Outline of usage
//!
//! ```no_run
//! # use stagecall_coordinator::*;
//! # fn page<S: SignalChannel, V: StageView>(signals: S, view: V) -> Result<(), CoordinatorError> {
//! let client = stagecall_client::StageApiClient::new("http://localhost:8080");
//! let (events_tx, mut events_rx) = stage_events();
//! let mut stage = StageCoordinator::new(StageConfig::default(), signals, view, client);
//!
//! // SDK callbacks
//! let me = stage.publisher("my-stream");
//! stage.on_participant_joined(me)?;
//! events_tx.send(StageEvent::StreamCreated(Participant::remote("their-stream"))).ok();
//!
//! // UI callbacks
//! stage.toggle_layout();
//!
//! stage.pump(&mut events_rx);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod arrangement;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod notifier;
pub mod participant;
pub mod ports;
pub mod state;

pub use archive::{ArchiveSession, RecordingControls};
pub use arrangement::{Arrangement, Placement};
pub use config::StageConfig;
pub use coordinator::StageCoordinator;
pub use error::CoordinatorError;
pub use events::{stage_events, StageEvent, StageEventReceiver, StageEventSender};
pub use notifier::{Outbound, OutboundKind, StageNotifier};
pub use participant::{ElementId, Participant, StreamId};
pub use ports::{SignalChannel, StageView};
pub use state::{PendingFocus, SessionState};
pub use stagecall_types::{LayoutMode, StageSignal};
