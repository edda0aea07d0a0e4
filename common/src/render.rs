//! Render state tracking for conditional redraws.
//!
//! The panel is redrawn only when something it shows has changed. Callers
//! pass the page being shown and that page's revision counter
//! ([`SensorStateController::revision`](crate::controller::SensorStateController::revision)
//! for the panel, [`LogBuffer::revision`](crate::log_buffer::LogBuffer::revision)
//! for the log). [`RenderState::check_dirty`] reports whether either differs
//! from the last drawn frame.
//!
//! | Trigger                  | Result            |
//! |--------------------------|-------------------|
//! | First frame              | Full redraw       |
//! | Page switch              | Full redraw       |
//! | Revision changed         | Full redraw       |
//! | [`RenderState::invalidate`] (overlay closed) | Full redraw |
//! | Nothing changed          | Skip              |

use crate::pages::Page;

/// Tracks what was last drawn.
pub struct RenderState {
    /// Page and revision of the last drawn frame. `None` forces a redraw.
    drawn: Option<(Page, u32)>,
}

impl RenderState {
    /// Create a render state that redraws on the first check.
    pub const fn new() -> Self { Self { drawn: None } }

    /// Returns `true` if the frame must be redrawn, and records it as drawn.
    pub fn check_dirty(
        &mut self,
        page: Page,
        revision: u32,
    ) -> bool {
        let current = Some((page, revision));
        if self.drawn == current {
            return false;
        }
        self.drawn = current;
        true
    }

    /// Force a redraw on the next check (e.g. after an overlay was shown).
    #[inline]
    pub fn invalidate(&mut self) { self.drawn = None; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_dirty() {
        let mut state = RenderState::new();
        assert!(state.check_dirty(Page::Panel, 0));
        assert!(!state.check_dirty(Page::Panel, 0));
    }

    #[test]
    fn test_revision_change_dirty() {
        let mut state = RenderState::new();
        state.check_dirty(Page::Panel, 3);
        assert!(state.check_dirty(Page::Panel, 4));
        assert!(!state.check_dirty(Page::Panel, 4));
    }

    #[test]
    fn test_page_switch_dirty() {
        let mut state = RenderState::new();
        state.check_dirty(Page::Panel, 7);
        assert!(state.check_dirty(Page::Log, 7));
        assert!(state.check_dirty(Page::Panel, 7));
    }

    #[test]
    fn test_invalidate() {
        let mut state = RenderState::new();
        state.check_dirty(Page::Log, 1);
        state.invalidate();
        assert!(state.check_dirty(Page::Log, 1));
    }
}
