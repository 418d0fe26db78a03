//! Observable side-effect hooks the screen calls into.
//!
//! These are the screen's only outward-facing effects: everything else is
//! read back from `display`/`dirty`/`cursor`. Embedders implement
//! [`EventListener`] to wire them up to a PTY, a log, or a test probe.

/// Hooks the screen invokes for observable side effects.
///
/// Default no-op implementations are provided so embedders only override
/// what they care about.
pub trait EventListener {
    /// The screen wants to send `data` back to the controlling process
    /// (device attribute/status reports).
    fn write_process_input(&mut self, _data: String) {}

    /// `BEL` was received.
    fn bell(&mut self) {}

    /// The window/tab title changed.
    fn set_title(&mut self, _title: String) {}

    /// The icon name changed.
    fn set_icon_name(&mut self, _icon_name: String) {}
}

/// An `EventListener` that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidListener;

impl EventListener for VoidListener {}
