
use crate::tooltip::PopupSurface;

/// Records what the controller asked the popup to do.
#[derive(Debug, Default)]
pub(super) struct RecordingSurface {
    pub visible: bool,
    pub entries: Vec<String>,
    pub shows: usize,
    pub hides: usize,
}

impl PopupSurface for RecordingSurface {
    fn show_popup(&mut self, entries: &[String]) {
        self.visible = true;
        self.entries = entries.to_vec();
        self.shows += 1;
    }

    fn hide_popup(&mut self) {
        self.visible = false;
        self.hides += 1;
    }
}

pub(super) fn entries(header: &str) -> Vec<String> {
    vec![header.to_string(), "P50: 1".to_string()]
}
