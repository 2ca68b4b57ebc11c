//! Layout mode detection.
//!
//! The viewport width only decides which export action the results view
//! offers: a printable document on desktop, a QR code on mobile (where the
//! traveller is more likely to want the journey on another device). It never
//! touches itinerary state.

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn for_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn export_action(self) -> ExportAction {
        match self {
            LayoutMode::Mobile => ExportAction::Qr,
            LayoutMode::Desktop => ExportAction::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Pdf,
    Qr,
}

impl ExportAction {
    pub fn label(self) -> &'static str {
        match self {
            ExportAction::Pdf => "Download PDF",
            ExportAction::Qr => "Show QR Code",
        }
    }
}

/// A registered resize listener. Exists between mount and teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportListener {
    mode: LayoutMode,
}

impl ViewportListener {
    pub fn mount(width: u32) -> Self {
        Self {
            mode: LayoutMode::for_width(width),
        }
    }

    /// Recompute the mode. Returns true when it changed; repeating the same
    /// width is a no-op.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let mode = LayoutMode::for_width(width);
        let changed = mode != self.mode;
        self.mode = mode;
        changed
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }
}
