//! Text and tooltip shown on a toggle control.

/// Glyph and tooltip for a toggle button.
///
/// The glyph shows what the control *switches to*, the title describes the
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLabel {
    pub glyph: &'static str,
    pub title: &'static str,
}
