//! Core component trait
//!
//! Every focusable panel implements `Component` so focus checks and
//! styling go through one identity type.

use crate::tui::theme::Theme;

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Search results list
    Results,
    /// System logs panel
    Logs,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need: no access to mutable app state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all panels
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Whether this component has focus in the given context
    fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.is_focused(self.id())
    }
}
