//! Interaction state for the portfolio gallery, kept free of DOM types so the
//! transition rules can be exercised directly on the native target.

use crate::data::PortfolioItem;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceClass {
    Pointer,
    Touch,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickAction {
    /// First tap on a touch device: show the overlay instead of acting.
    Reveal,
    /// External destination: open the shared preview modal.
    OpenModal,
    /// Internal or otherwise relative destination: open it directly.
    Navigate,
    /// Empty url: the click is inert.
    Ignore,
}

pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http")
}

/// Click policy for a gallery card, in priority order.
pub fn decide_item_click(device: DeviceClass, overlay_revealed: bool, url: &str) -> ClickAction {
    if device == DeviceClass::Touch && !overlay_revealed {
        return ClickAction::Reveal;
    }

    if is_absolute_url(url) {
        return ClickAction::OpenModal;
    }

    if !url.is_empty() {
        return ClickAction::Navigate;
    }

    ClickAction::Ignore
}

/// Containment decision for the outside-click detector. A target that left
/// the document between dispatch and handling counts as outside.
pub fn outside_click_should_cancel(target_connected: bool, region_contains_target: bool) -> bool {
    !target_connected || !region_contains_target
}

/// Per-card controller. The device class defaults to `Pointer` and is refined
/// once after mount; the overlay may only stay revealed on a touch device.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ItemController {
    device: DeviceClass,
    revealed: bool,
}

impl ItemController {
    pub fn new(device: DeviceClass) -> Self {
        Self {
            device,
            revealed: false,
        }
    }

    /// Second phase of device detection. Settling on a pointer device clears
    /// any revealed overlay so the touch-only invariant holds.
    pub fn refine_device(&mut self, device: DeviceClass) {
        self.device = device;
        if device != DeviceClass::Touch {
            self.revealed = false;
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Applies the click policy and records the reveal transition.
    pub fn on_click(&mut self, url: &str) -> ClickAction {
        let action = decide_item_click(self.device, self.revealed, url);
        if action == ClickAction::Reveal {
            self.revealed = true;
        }

        action
    }

    /// Outside interaction or cancellation key: back to idle.
    pub fn dismiss(&mut self) {
        self.revealed = false;
    }
}

/// Shared modal state for the whole gallery: at most one open preview, with
/// the background-scroll lock held exactly while it is open.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModalLifecycle {
    active: Option<PortfolioItem>,
    preview_loading: bool,
    scroll_locked: bool,
}

impl ModalLifecycle {
    pub fn closed() -> Self {
        Self {
            active: None,
            preview_loading: false,
            scroll_locked: false,
        }
    }

    /// Opens the preview for an external item. Items without an absolute url
    /// never open a modal; the request is ignored and `false` is returned.
    pub fn request_open(&mut self, item: PortfolioItem) -> bool {
        if !item.has_absolute_url() {
            return false;
        }

        self.active = Some(item);
        self.preview_loading = true;
        self.scroll_locked = true;
        true
    }

    /// The embedded preview reported a successful load.
    pub fn preview_loaded(&mut self) {
        if self.active.is_some() {
            self.preview_loading = false;
        }
    }

    /// Any close trigger: button, outside click, or cancellation key.
    pub fn close(&mut self) {
        self.active = None;
        self.preview_loading = false;
        self.scroll_locked = false;
    }

    pub fn active(&self) -> Option<&PortfolioItem> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn preview_loading(&self) -> bool {
        self.preview_loading
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PORTFOLIO_ITEMS;

    fn item(title: &str) -> PortfolioItem {
        *PORTFOLIO_ITEMS
            .iter()
            .find(|candidate| candidate.title == title)
            .expect("seeded portfolio item")
    }

    #[test]
    fn empty_url_click_is_inert_everywhere() {
        let polibase = item("Polibase");

        let mut pointer = ItemController::new(DeviceClass::Pointer);
        assert_eq!(pointer.on_click(polibase.url), ClickAction::Ignore);
        assert!(!pointer.revealed());

        let mut touch = ItemController::new(DeviceClass::Touch);
        assert_eq!(touch.on_click(polibase.url), ClickAction::Reveal);
        assert_eq!(touch.on_click(polibase.url), ClickAction::Ignore);

        let mut modal = ModalLifecycle::closed();
        assert!(!modal.request_open(polibase));
        assert_eq!(modal, ModalLifecycle::closed());
    }

    #[test]
    fn absolute_url_opens_modal_on_pointer_device() {
        let earshot = item("Earshot");

        let mut controller = ItemController::new(DeviceClass::Pointer);
        assert_eq!(controller.on_click(earshot.url), ClickAction::OpenModal);

        let mut modal = ModalLifecycle::closed();
        assert!(modal.request_open(earshot));
        assert_eq!(modal.active().map(|active| active.title), Some("Earshot"));
        assert!(modal.preview_loading());
    }

    #[test]
    fn first_touch_tap_reveals_instead_of_opening() {
        let earshot = item("Earshot");
        let mut controller = ItemController::new(DeviceClass::Touch);

        assert_eq!(controller.on_click(earshot.url), ClickAction::Reveal);
        assert!(controller.revealed());

        assert_eq!(controller.on_click(earshot.url), ClickAction::OpenModal);
    }

    #[test]
    fn second_touch_tap_on_internal_route_navigates() {
        let mut controller = ItemController::new(DeviceClass::Touch);

        assert_eq!(
            controller.on_click("/monday-night-group"),
            ClickAction::Reveal
        );
        assert_eq!(
            controller.on_click("/monday-night-group"),
            ClickAction::Navigate
        );
    }

    #[test]
    fn pointer_device_never_reveals() {
        assert_eq!(
            decide_item_click(DeviceClass::Pointer, false, ""),
            ClickAction::Ignore
        );
        assert_eq!(
            decide_item_click(DeviceClass::Pointer, false, "/resume"),
            ClickAction::Navigate
        );
    }

    #[test]
    fn settling_on_pointer_clears_a_revealed_overlay() {
        let mut controller = ItemController::new(DeviceClass::Touch);
        controller.on_click("https://www.earshotlivemusic.com");
        assert!(controller.revealed());

        controller.refine_device(DeviceClass::Pointer);
        assert!(!controller.revealed());
        assert_eq!(controller.device(), DeviceClass::Pointer);
    }

    #[test]
    fn dismiss_returns_a_revealed_overlay_to_idle() {
        let mut controller = ItemController::new(DeviceClass::Touch);
        controller.on_click("https://www.earshotlivemusic.com");
        assert!(controller.revealed());

        controller.dismiss();
        assert!(!controller.revealed());

        controller.dismiss();
        assert!(!controller.revealed());
    }

    #[test]
    fn pointer_down_inside_region_never_cancels() {
        assert!(!outside_click_should_cancel(true, true));
    }

    #[test]
    fn pointer_down_outside_region_cancels() {
        assert!(outside_click_should_cancel(true, false));
    }

    #[test]
    fn detached_target_counts_as_outside() {
        assert!(outside_click_should_cancel(false, true));
        assert!(outside_click_should_cancel(false, false));
    }

    #[test]
    fn preview_load_event_clears_the_loading_indicator() {
        let mut modal = ModalLifecycle::closed();
        assert!(modal.request_open(item("Earshot")));
        assert!(modal.preview_loading());

        modal.preview_loaded();
        assert!(!modal.preview_loading());
        assert!(modal.is_open());
    }

    #[test]
    fn preview_load_on_a_closed_modal_is_a_no_op() {
        let mut modal = ModalLifecycle::closed();
        modal.preview_loaded();
        assert_eq!(modal, ModalLifecycle::closed());
    }

    #[test]
    fn scroll_lock_tracks_open_state_across_sequences() {
        let mut modal = ModalLifecycle::closed();
        assert!(!modal.scroll_locked());

        assert!(modal.request_open(item("Earshot")));
        assert!(modal.scroll_locked());

        modal.preview_loaded();
        assert!(modal.scroll_locked());

        modal.close();
        assert!(!modal.scroll_locked());

        modal.close();
        assert!(!modal.scroll_locked());

        assert!(modal.request_open(item("EasyCryptoTaxes")));
        assert!(modal.scroll_locked());

        modal.close();
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn close_while_loading_resets_everything() {
        let mut modal = ModalLifecycle::closed();
        assert!(modal.request_open(item("Flyertap")));

        modal.close();
        assert_eq!(modal, ModalLifecycle::closed());
    }

    #[test]
    fn opening_a_second_project_replaces_the_first() {
        let mut modal = ModalLifecycle::closed();
        assert!(modal.request_open(item("Earshot")));
        modal.preview_loaded();

        assert!(modal.request_open(item("EasyCryptoTaxes")));
        assert_eq!(
            modal.active().map(|active| active.title),
            Some("EasyCryptoTaxes")
        );
        assert!(modal.preview_loading());
    }
}
