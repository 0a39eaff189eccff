/// Whatever displays the popup. The controller decides *when*; the surface
/// decides *how*.
pub trait PopupSurface {
    fn show_popup(&mut self, entries: &[String]);
    fn hide_popup(&mut self);
}
