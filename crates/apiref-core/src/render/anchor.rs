//! Section anchors: stable identifiers plus the hover affordance state
//!
//! An anchor identifier is a pure function of the heading text. The
//! interactive part is a two-state machine over one visibility flag, owned
//! by the rendered instance and reset whenever a new schema is rendered.

use tracing::trace;

use crate::traits::Navigator;

/// Compute the URL-safe anchor identifier for a heading.
///
/// Lower-cases the text and collapses every whitespace run to a single
/// hyphen; leading and trailing whitespace contributes nothing. Idempotent
/// under re-application. There is no collision detection across headings on
/// the same page; uniqueness is the caller's responsibility.
pub fn anchor_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Visibility of the anchor glyph next to a heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorVisibility {
    /// Glyph hidden; the initial state
    #[default]
    Hidden,
    /// Glyph shown while the pointer hovers the heading
    Visible,
}

/// Per-render interactive state for one heading's anchor.
///
/// The flag controls only a visual affordance and has no effect on
/// synthesis or data correctness. Every call to [`crate::render`] creates a
/// fresh controller, so hover state never leaks across endpoints.
#[derive(Debug, Clone)]
pub struct AnchorController {
    heading: String,
    visibility: AnchorVisibility,
}

impl AnchorController {
    /// Create a controller for a heading, starting hidden.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            visibility: AnchorVisibility::Hidden,
        }
    }

    /// The anchor identifier for this controller's heading.
    pub fn anchor_id(&self) -> String {
        anchor_id(&self.heading)
    }

    /// Current glyph visibility.
    pub fn visibility(&self) -> AnchorVisibility {
        self.visibility
    }

    /// Whether the glyph is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visibility == AnchorVisibility::Visible
    }

    /// Pointer entered the heading. Idempotent.
    pub fn hover_enter(&mut self) {
        self.visibility = AnchorVisibility::Visible;
    }

    /// Pointer left the heading.
    pub fn hover_leave(&mut self) {
        self.visibility = AnchorVisibility::Hidden;
    }

    /// Heading activated: request navigation to this section.
    ///
    /// Leaves the visibility flag untouched. The request is fire-and-forget;
    /// the navigator's failures are not observed.
    pub fn activate(&self, navigator: &dyn Navigator) {
        let id = self.anchor_id();
        trace!(anchor = %id, "navigation requested");
        navigator.set_fragment(&id);
    }
}
