//! Split-button disclosure: primary action plus a secondary menu.
//!
//! DESIGN
//! ======
//! `Disclosure` is a two-state machine (closed, open) that turns inputs into
//! effects the host performs (open a URL, move focus). It never touches the
//! DOM. `DisclosureWidget` adds the one piece of page-wide wiring, a
//! document pointer subscription used for outside-click dismissal, which is
//! acquired in `mount` and released in `unmount`.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Label used when the host element does not provide one.
pub const DEFAULT_LABEL: &str = "View";

/// A menu entry and where it leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub label: String,
    /// `None` when the configured href is empty or the `#` placeholder.
    pub href: Option<String>,
}

impl Destination {
    pub fn new(label: impl Into<String>, raw_href: Option<&str>) -> Self {
        let href = raw_href
            .map(str::trim)
            .filter(|h| !h.is_empty() && *h != "#")
            .map(str::to_owned);
        Self { label: label.into(), href }
    }
}

/// Attributes read from a `<split-button>` host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitButtonConfig {
    pub label: String,
    pub destinations: Vec<Destination>,
}

impl SplitButtonConfig {
    pub fn from_attrs(label: Option<&str>, figma_href: Option<&str>, handoff_href: Option<&str>) -> Self {
        let label = label
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LABEL)
            .to_owned();
        Self {
            label,
            destinations: vec![
                Destination::new("Figma", figma_href),
                Destination::new("Handoff", handoff_href),
            ],
        }
    }
}

/// Keys handled on a focused menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Escape,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Arrow keys suppress page scrolling; Escape keeps its default.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureInput {
    /// Click on the menu toggle.
    ToggleActivated,
    /// ArrowDown while the toggle has focus.
    ToggleArrowDown,
    /// Click on the primary button.
    PrimaryActivated,
    /// Click on the menu item at the index.
    ItemSelected(usize),
    /// Navigation key on the menu item at `index`.
    ItemKey { index: usize, key: NavKey },
    /// Pointer activation outside the widget boundary.
    PointerOutside,
}

/// Side effect the host must carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureEffect {
    /// Open in a new browsing context without an opener reference.
    OpenDetached(String),
    FocusItem(usize),
    FocusToggle,
}

/// Open/closed state plus the configured destinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
    destinations: Vec<Destination>,
}

impl Disclosure {
    /// Closed widget over `destinations`.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { open: false, destinations }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Advance the state machine.
    pub fn apply(&mut self, input: DisclosureInput) -> Vec<DisclosureEffect> {
        match input {
            DisclosureInput::ToggleActivated => {
                self.open = !self.open;
                Vec::new()
            }
            DisclosureInput::ToggleArrowDown => {
                self.open = true;
                if self.destinations.is_empty() {
                    Vec::new()
                } else {
                    vec![DisclosureEffect::FocusItem(0)]
                }
            }
            DisclosureInput::PrimaryActivated => self.open_effect(0).into_iter().collect(),
            DisclosureInput::ItemSelected(index) => {
                let effect = self.open_effect(index);
                self.open = false;
                effect.into_iter().collect()
            }
            DisclosureInput::ItemKey { index, key } => self.navigate(index, key),
            DisclosureInput::PointerOutside => {
                self.open = false;
                Vec::new()
            }
        }
    }

    fn open_effect(&self, index: usize) -> Option<DisclosureEffect> {
        self.destinations
            .get(index)
            .and_then(|d| d.href.clone())
            .map(DisclosureEffect::OpenDetached)
    }

    fn navigate(&mut self, index: usize, key: NavKey) -> Vec<DisclosureEffect> {
        let count = self.destinations.len();
        match key {
            NavKey::Escape => {
                self.open = false;
                vec![DisclosureEffect::FocusToggle]
            }
            _ if count == 0 => Vec::new(),
            NavKey::Down => vec![DisclosureEffect::FocusItem((index + 1) % count)],
            NavKey::Up => vec![DisclosureEffect::FocusItem((index % count + count - 1) % count)],
        }
    }
}

/// Where a document-level pointer activation landed relative to a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOrigin {
    Inside,
    Outside,
}

/// Source of document-wide pointer activations.
pub trait PointerHub {
    /// Handle proving a live registration; returned to `unsubscribe`.
    type Subscription;

    fn subscribe(&mut self, listener: Box<dyn Fn(PointerOrigin)>) -> Self::Subscription;
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}

/// Shared, mutable home of a `Disclosure`.
pub trait DisclosureCell: Clone + 'static {
    /// Run `f` against the state. `None` when the state is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut Disclosure) -> R) -> Option<R>;
    fn is_open(&self) -> bool;
}

impl DisclosureCell for Rc<RefCell<Disclosure>> {
    fn modify<R>(&self, f: impl FnOnce(&mut Disclosure) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn is_open(&self) -> bool {
        self.borrow().is_open()
    }
}

/// Feed `input` through the state held by `cell`.
pub fn dispatch<C: DisclosureCell>(cell: &C, input: DisclosureInput) -> Vec<DisclosureEffect> {
    cell.modify(|d| d.apply(input)).unwrap_or_default()
}

/// A disclosure bound to a pointer hub for outside-click dismissal.
pub struct DisclosureWidget<C, H: PointerHub> {
    cell: C,
    hub: H,
    subscription: Option<H::Subscription>,
}

impl<C: DisclosureCell, H: PointerHub> DisclosureWidget<C, H> {
    pub fn new(cell: C, hub: H) -> Self {
        Self { cell, hub, subscription: None }
    }

    /// Start listening for outside clicks. Repeated calls keep one listener.
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let cell = self.cell.clone();
        let listener = Box::new(move |origin: PointerOrigin| {
            if origin == PointerOrigin::Outside && cell.is_open() {
                dispatch(&cell, DisclosureInput::PointerOutside);
            }
        });
        self.subscription = Some(self.hub.subscribe(listener));
    }

    /// Release the outside-click listener.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.hub.unsubscribe(subscription);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn set_open(&self, open: bool) {
        self.cell.modify(|d| d.set_open(open));
    }

    pub fn is_open(&self) -> bool {
        self.cell.is_open()
    }

    pub fn handle(&self, input: DisclosureInput) -> Vec<DisclosureEffect> {
        dispatch(&self.cell, input)
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }
}

impl<C, H: PointerHub> Drop for DisclosureWidget<C, H> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.hub.unsubscribe(subscription);
        }
    }
}
