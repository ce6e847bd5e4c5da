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

//! Seams to the page's collaborators: the video SDK session and the DOM.
//!
//! The coordinator owns one implementation of each and calls into them after
//! every state change. Neither trait is expected to block.

use stagecall_types::StageSignal;

use crate::archive::RecordingControls;
use crate::arrangement::Arrangement;
use crate::participant::{ElementId, Participant};

/// Broadcast half of the video SDK session.
pub trait SignalChannel {
    /// Send `signal` to every participant connected to the session.
    fn signal(&mut self, signal: &StageSignal) -> anyhow::Result<()>;
}

/// The page's stream container and recording controls.
pub trait StageView {
    /// Add a display element for a newly joined participant.
    fn create_element(&mut self, participant: &Participant);

    fn remove_element(&mut self, element_id: &ElementId);

    /// Move the focus designation to `element_id`, or clear it.
    fn mark_focused(&mut self, element_id: Option<&ElementId>);

    /// Reorder and offset the stream elements.
    fn apply_arrangement(&mut self, arrangement: &Arrangement);

    fn render_recording_controls(&mut self, controls: RecordingControls);

    /// Enable or disable the archive options form outside of a state change,
    /// e.g. right after a start click.
    fn set_archive_form_enabled(&mut self, enabled: bool);
}
