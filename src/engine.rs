use crate::action::Action;
use crate::preview::CursorPreview;
use crate::surface::{BACKGROUND, Surface};

/// Clear the surface and replay every action in order, then overlay the
/// cursor preview (always on top, never part of the history). The single
/// render entry point; the export path reuses it with no preview.
pub fn replay(surface: &mut dyn Surface, actions: &[Action], preview: Option<&CursorPreview>) {
    surface.clear(BACKGROUND);
    for action in actions {
        action.render(surface);
    }
    if let Some(preview) = preview {
        preview.render(surface);
    }
}

/// Coalesces invalidation bursts into a single repaint via a dirty flag.
///
/// Every input sample during a drag invalidates; without coalescing that
/// would mean a full-canvas replay per sample. Only the clean-to-dirty
/// transition notifies the registered observer; the flag is drained by the
/// next repaint.
///
/// The browser original dispatches a custom event that repaints
/// synchronously. Under an immediate-mode frame loop the observer instead
/// requests a frame and the flag is drained once per frame, which preserves
/// the property that K synchronous invalidations cause exactly one repaint.
#[derive(Default)]
pub struct RedrawEngine {
    dirty: bool,
    on_dirty: Option<Box<dyn FnMut()>>,
}

impl RedrawEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the observer called once per clean-to-dirty transition.
    pub fn set_on_dirty(&mut self, observer: impl FnMut() + 'static) {
        self.on_dirty = Some(Box::new(observer));
    }

    /// Mark the render stale. Returns true on the clean-to-dirty transition;
    /// calls while already dirty are absorbed and notify nobody.
    pub fn invalidate(&mut self) -> bool {
        if self.dirty {
            return false;
        }
        self.dirty = true;
        if let Some(observer) = &mut self.on_dirty {
            observer();
        }
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Full repaint: replay the committed history plus the preview, and
    /// clear the dirty flag. Valid on an empty history and absent preview.
    pub fn repaint(
        &mut self,
        surface: &mut dyn Surface,
        actions: &[Action],
        preview: Option<&CursorPreview>,
    ) {
        self.dirty = false;
        replay(surface, actions, preview);
    }

    /// Repaint only when invalidated since the last repaint. Returns whether
    /// a repaint happened.
    pub fn repaint_if_dirty(
        &mut self,
        surface: &mut dyn Surface,
        actions: &[Action],
        preview: Option<&CursorPreview>,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        self.repaint(surface, actions, preview);
        true
    }
}
