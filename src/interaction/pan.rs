/// Canvas pan gesture: `Idle -> Panning -> Idle`.
///
/// Operates purely on pointer X and scroll offset; the host owns the
/// actual scroll position and applies the returned offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanSession {
    anchor: Option<PanAnchor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanAnchor {
    pointer_x: f64,
    scroll_offset: f64,
}

impl PanSession {
    pub fn begin(&mut self, pointer_x: f64, scroll_offset: f64) {
        self.anchor = Some(PanAnchor {
            pointer_x,
            scroll_offset,
        });
    }

    /// New scroll offset for the current pointer position.
    ///
    /// Gain above 1.0 makes the canvas travel faster than the pointer.
    /// Returns `None` while idle.
    #[must_use]
    pub fn update(&self, pointer_x: f64, gain: f64) -> Option<f64> {
        self.anchor
            .map(|anchor| anchor.scroll_offset - (pointer_x - anchor.pointer_x) * gain)
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}
