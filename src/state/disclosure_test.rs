use super::*;

fn destinations() -> Vec<Destination> {
    SplitButtonConfig::from_attrs(
        Some("Case study"),
        Some("https://figma.com/file/abc"),
        Some("https://handoff.example.com/x"),
    )
    .destinations
}

fn cell() -> Rc<RefCell<Disclosure>> {
    Rc::new(RefCell::new(Disclosure::new(destinations())))
}

/// Hub whose listeners are fired by the test.
#[derive(Clone, Default)]
struct ManualHub {
    listeners: Rc<RefCell<Vec<(usize, Box<dyn Fn(PointerOrigin)>)>>>,
    next_id: Rc<RefCell<usize>>,
}

impl ManualHub {
    fn click(&self, origin: PointerOrigin) {
        for (_, listener) in self.listeners.borrow().iter() {
            listener(origin);
        }
    }

    fn live(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl PointerHub for ManualHub {
    type Subscription = usize;

    fn subscribe(&mut self, listener: Box<dyn Fn(PointerOrigin)>) -> usize {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&mut self, subscription: usize) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != subscription);
    }
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn config_defaults_label_and_drops_placeholder_hrefs() {
    let config = SplitButtonConfig::from_attrs(None, Some("#"), None);
    assert_eq!(config.label, "View");
    assert_eq!(config.destinations.len(), 2);
    assert_eq!(config.destinations[0].label, "Figma");
    assert_eq!(config.destinations[0].href, None);
    assert_eq!(config.destinations[1].label, "Handoff");
    assert_eq!(config.destinations[1].href, None);
}

#[test]
fn config_keeps_real_hrefs() {
    let config = SplitButtonConfig::from_attrs(Some("Open"), Some(" https://a.test "), Some("https://b.test"));
    assert_eq!(config.label, "Open");
    assert_eq!(config.destinations[0].href.as_deref(), Some("https://a.test"));
    assert_eq!(config.destinations[1].href.as_deref(), Some("https://b.test"));
}

#[test]
fn nav_key_mapping() {
    assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
    assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Up));
    assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
    assert_eq!(NavKey::from_key("Enter"), None);
    assert!(NavKey::Down.prevents_default());
    assert!(!NavKey::Escape.prevents_default());
}

// =============================================================
// State machine
// =============================================================

#[test]
fn starts_closed_and_toggle_flips() {
    let mut d = Disclosure::new(destinations());
    assert!(!d.is_open());
    assert!(d.apply(DisclosureInput::ToggleActivated).is_empty());
    assert!(d.is_open());
    d.apply(DisclosureInput::ToggleActivated);
    assert!(!d.is_open());
}

#[test]
fn arrow_down_on_toggle_opens_and_focuses_first_item() {
    let mut d = Disclosure::new(destinations());
    let effects = d.apply(DisclosureInput::ToggleArrowDown);
    assert!(d.is_open());
    assert_eq!(effects, vec![DisclosureEffect::FocusItem(0)]);
}

#[test]
fn selecting_an_item_opens_it_and_always_closes() {
    for start_open in [false, true] {
        let mut d = Disclosure::new(destinations());
        d.set_open(start_open);
        let effects = d.apply(DisclosureInput::ItemSelected(1));
        assert!(!d.is_open());
        assert_eq!(
            effects,
            vec![DisclosureEffect::OpenDetached("https://handoff.example.com/x".to_owned())]
        );
    }
}

#[test]
fn selecting_placeholder_item_closes_without_opening() {
    let config = SplitButtonConfig::from_attrs(None, Some("#"), None);
    let mut d = Disclosure::new(config.destinations);
    d.set_open(true);
    assert!(d.apply(DisclosureInput::ItemSelected(0)).is_empty());
    assert!(!d.is_open());
}

#[test]
fn primary_opens_first_destination_and_keeps_state() {
    for start_open in [false, true] {
        let mut d = Disclosure::new(destinations());
        d.set_open(start_open);
        let effects = d.apply(DisclosureInput::PrimaryActivated);
        assert_eq!(d.is_open(), start_open);
        assert_eq!(
            effects,
            vec![DisclosureEffect::OpenDetached("https://figma.com/file/abc".to_owned())]
        );
    }
}

#[test]
fn primary_with_placeholder_does_nothing() {
    let mut d = Disclosure::new(SplitButtonConfig::from_attrs(None, None, None).destinations);
    assert!(d.apply(DisclosureInput::PrimaryActivated).is_empty());
}

#[test]
fn escape_closes_and_returns_focus_to_toggle() {
    let mut d = Disclosure::new(destinations());
    d.set_open(true);
    let effects = d.apply(DisclosureInput::ItemKey { index: 1, key: NavKey::Escape });
    assert!(!d.is_open());
    assert_eq!(effects, vec![DisclosureEffect::FocusToggle]);
}

#[test]
fn arrow_keys_wrap_around_items() {
    let mut d = Disclosure::new(destinations());
    d.set_open(true);
    let down = |d: &mut Disclosure, index| d.apply(DisclosureInput::ItemKey { index, key: NavKey::Down });
    let up = |d: &mut Disclosure, index| d.apply(DisclosureInput::ItemKey { index, key: NavKey::Up });
    assert_eq!(down(&mut d, 0), vec![DisclosureEffect::FocusItem(1)]);
    assert_eq!(down(&mut d, 1), vec![DisclosureEffect::FocusItem(0)]);
    assert_eq!(up(&mut d, 0), vec![DisclosureEffect::FocusItem(1)]);
    assert_eq!(up(&mut d, 1), vec![DisclosureEffect::FocusItem(0)]);
    assert!(d.is_open());
}

#[test]
fn navigation_without_items_is_inert() {
    let mut d = Disclosure::new(Vec::new());
    assert!(d.apply(DisclosureInput::ToggleArrowDown).is_empty());
    assert!(d.apply(DisclosureInput::ItemKey { index: 0, key: NavKey::Down }).is_empty());
}

// =============================================================
// Widget lifecycle
// =============================================================

#[test]
fn toggle_then_outside_click_closes() {
    let hub = ManualHub::default();
    let mut widget = DisclosureWidget::new(cell(), hub.clone());
    widget.mount();
    widget.handle(DisclosureInput::ToggleActivated);
    assert!(widget.is_open());
    hub.click(PointerOrigin::Outside);
    assert!(!widget.is_open());
}

#[test]
fn inside_click_keeps_menu_open() {
    let hub = ManualHub::default();
    let mut widget = DisclosureWidget::new(cell(), hub.clone());
    widget.mount();
    widget.set_open(true);
    hub.click(PointerOrigin::Inside);
    assert!(widget.is_open());
}

#[test]
fn mount_registers_once_and_unmount_releases() {
    let hub = ManualHub::default();
    let mut widget = DisclosureWidget::new(cell(), hub.clone());
    assert!(!widget.is_mounted());
    widget.mount();
    widget.mount();
    assert_eq!(hub.live(), 1);
    widget.unmount();
    assert!(!widget.is_mounted());
    assert_eq!(hub.live(), 0);
}

#[test]
fn unmounted_widget_ignores_outside_clicks() {
    let hub = ManualHub::default();
    let mut widget = DisclosureWidget::new(cell(), hub.clone());
    widget.mount();
    widget.unmount();
    widget.set_open(true);
    hub.click(PointerOrigin::Outside);
    assert!(widget.is_open());
}

#[test]
fn dropping_widget_releases_subscription() {
    let hub = ManualHub::default();
    {
        let mut widget = DisclosureWidget::new(cell(), hub.clone());
        widget.mount();
        assert_eq!(hub.live(), 1);
    }
    assert_eq!(hub.live(), 0);
}

#[test]
fn widgets_do_not_share_state() {
    let hub = ManualHub::default();
    let mut first = DisclosureWidget::new(cell(), hub.clone());
    let second = DisclosureWidget::new(cell(), hub.clone());
    first.mount();
    first.set_open(true);
    assert!(first.is_open());
    assert!(!second.is_open());
}
