//! Portfolio page bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is static. `boot` runs once after the document is parsed
//! and attaches each component to the elements it finds; a missing element
//! disables only the component that needs it.
//!
//! Preferences are shared by the theme toggle and the sidebar, so they live
//! in one `PreferenceStore` behind `Rc<RefCell<_>>`. Every other component
//! owns its state inside the listeners that drive it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ShadowRootInit, ShadowRootMode,
};

use crate::components::certs_table::{CertRows, RowBatch};
use crate::components::split_button::SplitButton;
use crate::config::{SiteConfig, topbar_height_or_default};
use crate::net::certs::load_dataset;
use crate::state::disclosure::{Disclosure, DisclosureWidget, SplitButtonConfig};
use crate::state::filter::{FilterBlock, RecordFilter};
use crate::state::preferences::PreferenceStore;
use crate::state::scroll_spy::{ScrollSpy, SectionEntry};
use crate::state::table::{AriaSort, RowView, SortKey, TableEngine, TableView};
use crate::util::dom::{DocumentPointerHub, document, listen, next_frame, query_all};
use crate::util::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::util::theme::{apply_root, apply_sidebar, apply_toggle};

/// Class marking the navigation link of the section in view.
const ACTIVE_CLASS: &str = "active";

type SplitWidget = DisclosureWidget<RwSignal<Disclosure>, DocumentPointerHub>;

/// Preference backend for this page load.
enum PageStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl PageStore {
    fn open() -> Self {
        match LocalStorage::open() {
            Some(storage) => Self::Local(storage),
            None => {
                log::info!("localStorage unavailable; preferences last for this visit only");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Local(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

type Preferences = Rc<RefCell<PreferenceStore<PageStore>>>;

/// Attach every component to the current document.
pub fn boot(config: &SiteConfig) {
    let Some(doc) = document() else {
        log::warn!("no document; page wiring skipped");
        return;
    };
    let prefs: Preferences = Rc::new(RefCell::new(PreferenceStore::load(PageStore::open())));

    stamp_year(&doc, config);
    wire_theme(&doc, config, &prefs);
    wire_home_link(&doc, config);
    wire_search(&doc, config);
    wire_sidebar(&doc, config, &prefs);
    wire_certs(&doc, config);
    wire_scroll_spy(&doc, config);
    wire_split_buttons(&doc, config);
    log::debug!("portfolio page wired");
}

fn stamp_year(doc: &Document, config: &SiteConfig) {
    if let Some(el) = doc.get_element_by_id(config.ids.year) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

// =============================================================================
// Preferences
// =============================================================================

fn wire_theme(doc: &Document, config: &SiteConfig, prefs: &Preferences) {
    apply_root(prefs.borrow().theme());
    let Some(toggle) = doc.get_element_by_id(config.ids.theme_toggle) else {
        return;
    };
    apply_toggle(&toggle, prefs.borrow().indicator());

    let prefs = Rc::clone(prefs);
    let target = toggle.clone();
    listen(&toggle, "click", move |_| {
        let mut prefs = prefs.borrow_mut();
        let theme = prefs.toggle_theme();
        apply_root(theme);
        apply_toggle(&target, prefs.indicator());
    });
}

fn wire_sidebar(doc: &Document, config: &SiteConfig, prefs: &Preferences) {
    let (Some(sidebar), Some(toggle)) = (
        doc.get_element_by_id(config.ids.sidebar),
        doc.get_element_by_id(config.ids.sidebar_toggle),
    ) else {
        return;
    };
    apply_sidebar(&sidebar, &toggle, prefs.borrow().sidebar());

    let prefs = Rc::clone(prefs);
    let target = toggle.clone();
    listen(&toggle, "click", move |_| {
        let state = prefs.borrow_mut().toggle_sidebar();
        apply_sidebar(&sidebar, &target, state);
    });
}

/// Drop focus from the home link after a pointer click so the focus ring
/// does not linger. Keyboard activation (`detail == 0`) keeps focus.
fn wire_home_link(doc: &Document, config: &SiteConfig) {
    let Ok(Some(link)) = doc.query_selector(config.home_link_selector) else {
        return;
    };
    let target = link.clone();
    listen(&link, "click", move |ev| {
        if !ev.dyn_ref::<MouseEvent>().is_some_and(|m| m.detail() > 0) {
            return;
        }
        let target = target.clone();
        next_frame(move || {
            if let Some(el) = target.dyn_ref::<HtmlElement>() {
                if let Err(err) = el.blur() {
                    log::debug!("home link blur failed: {err:?}");
                }
            }
        });
    });
}

// =============================================================================
// Search
// =============================================================================

struct DomBlock(HtmlElement);

impl FilterBlock for DomBlock {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        let style = self.0.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if let Err(err) = result {
            log::debug!("block visibility not applied: {err:?}");
        }
    }
}

fn wire_search(doc: &Document, config: &SiteConfig) {
    let Some(input) = doc
        .get_element_by_id(config.ids.search_input)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let filter = RefCell::new(RecordFilter::new());
    let run = {
        let doc = doc.clone();
        let input = input.clone();
        let card_selector = config.card_selector;
        let status_id = config.ids.search_status;
        Rc::new(move || {
            let mut blocks: Vec<DomBlock> = query_all(&doc, card_selector)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .map(DomBlock)
                .collect();
            let outcome = filter.borrow_mut().apply(&mut blocks, &input.value());
            if let Some(status) = doc.get_element_by_id(status_id) {
                status.set_text_content(Some(&outcome.status));
            }
        })
    };

    let on_input = Rc::clone(&run);
    listen(&input, "input", move |_| on_input());
    if let Some(submit) = doc.get_element_by_id(config.ids.search_submit) {
        listen(&submit, "click", move |ev| {
            ev.prevent_default();
            run();
        });
    }
}

// =============================================================================
// Certifications table
// =============================================================================

struct DomTable {
    headers: Vec<(SortKey, Element)>,
    rows: WriteSignal<RowBatch>,
}

impl TableView for DomTable {
    fn set_header_sort(&mut self, key: SortKey, sort: AriaSort) {
        for (_, th) in self.headers.iter().filter(|(k, _)| *k == key) {
            if let Err(err) = th.set_attribute("aria-sort", sort.as_str()) {
                log::debug!("aria-sort not set on {}: {err:?}", key.as_str());
            }
        }
    }

    fn replace_rows(&mut self, rows: Vec<RowView>) {
        self.rows.update(|batch| *batch = batch.next(rows));
    }

    fn header_keys(&self) -> Vec<SortKey> {
        self.headers.iter().map(|(key, _)| *key).collect()
    }
}

fn wire_certs(doc: &Document, config: &SiteConfig) {
    let Some(body) = doc
        .get_element_by_id(config.ids.certs_body)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    body.set_text_content(None);

    let (rows, set_rows) = signal(RowBatch::default());
    mount_to(body, move || view! { <CertRows rows=rows/> }).forget();

    let headers: Vec<(SortKey, Element)> = query_all(doc, config.sort_header_selector)
        .into_iter()
        .filter_map(|th| {
            let key = th.get_attribute("data-sort").as_deref().and_then(SortKey::parse)?;
            Some((key, th))
        })
        .collect();
    let engine = Rc::new(RefCell::new(TableEngine::new(DomTable {
        headers: headers.clone(),
        rows: set_rows,
    })));

    let url = config.certs_url;
    let inline_id = config.ids.certs_inline;
    leptos::task::spawn_local(async move {
        let dataset = load_dataset(url, inline_id).await;
        log::debug!("certifications ready from {} source", dataset.origin());
        engine.borrow_mut().load(dataset);
        attach_sort_handlers(&engine, headers);
    });
}

fn attach_sort_handlers(engine: &Rc<RefCell<TableEngine<DomTable>>>, headers: Vec<(SortKey, Element)>) {
    for (key, th) in headers {
        let on_click = Rc::clone(engine);
        listen(&th, "click", move |_| {
            on_click.borrow_mut().sort(key);
        });
        let on_key = Rc::clone(engine);
        listen(&th, "keydown", move |ev| {
            let activates = ev
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|k| matches!(k.key().as_str(), "Enter" | " "));
            if activates {
                ev.prevent_default();
                on_key.borrow_mut().sort(key);
            }
        });
    }
}

// =============================================================================
// Scroll-spy
// =============================================================================

fn wire_scroll_spy(doc: &Document, config: &SiteConfig) {
    let options = &config.scroll_spy;
    let sections: Vec<Element> = options
        .sections
        .iter()
        .filter_map(|id| doc.get_element_by_id(id))
        .collect();
    let links = query_all(doc, config.nav_link_selector);
    let hrefs = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let spy = ScrollSpy::new(sections.iter().map(Element::id).collect(), hrefs);
    if spy.is_inert() {
        return;
    }
    let spy = Rc::new(RefCell::new(spy));
    let links = Rc::new(links);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin(topbar_height(doc)));
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let callback = {
        let spy = Rc::clone(&spy);
        let links = Rc::clone(&links);
        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let entries: Vec<SectionEntry> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| SectionEntry {
                    section_id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            let fragment = spy.borrow_mut().on_entries(&entries);
            paint_links(&links, &spy.borrow());
            if let Some(fragment) = fragment {
                replace_fragment(&fragment);
            }
        })
    };
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("scroll-spy disabled: {err:?}");
            return;
        }
    };
    callback.forget();
    for section in &sections {
        observer.observe(section);
    }

    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    if spy.borrow_mut().activate_from_hash(&hash) {
        paint_links(&links, &spy.borrow());
    }

    for (index, link) in links.iter().enumerate() {
        let spy = Rc::clone(&spy);
        let all = Rc::clone(&links);
        listen(link, "click", move |_| {
            spy.borrow_mut().on_link_click(index);
            paint_links(&all, &spy.borrow());
        });
    }
}

/// Header height from the `--topbar-height` custom property on `<html>`.
fn topbar_height(doc: &Document) -> u32 {
    let raw = doc
        .document_element()
        .and_then(|root| web_sys::window()?.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("--topbar-height").ok());
    topbar_height_or_default(raw.as_deref())
}

fn paint_links(links: &[Element], spy: &ScrollSpy) {
    for (index, link) in links.iter().enumerate() {
        if let Err(err) = link.class_list().toggle_with_force(ACTIVE_CLASS, spy.is_active(index)) {
            log::debug!("nav link marker not applied: {err:?}");
        }
    }
}

/// Rewrite the URL fragment without adding a history entry.
fn replace_fragment(fragment: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
        log::debug!("fragment {fragment} not written: {err:?}");
    }
}

// =============================================================================
// Split buttons
// =============================================================================

/// Mount every split button and tie the outside-click listeners to the
/// page lifecycle: released on `pagehide`, re-acquired on `pageshow`.
fn wire_split_buttons(doc: &Document, config: &SiteConfig) {
    let widgets: Vec<SplitWidget> = query_all(doc, config.split_button_tag)
        .into_iter()
        .filter_map(|host| mount_split_button(doc, host))
        .collect();
    if widgets.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let widgets = Rc::new(RefCell::new(widgets));

    let hidden = Rc::clone(&widgets);
    listen(&window, "pagehide", move |_| {
        hidden.borrow_mut().iter_mut().for_each(SplitWidget::unmount);
    });
    listen(&window, "pageshow", move |_| {
        widgets.borrow_mut().iter_mut().for_each(SplitWidget::mount);
    });
}

fn mount_split_button(doc: &Document, host: Element) -> Option<SplitWidget> {
    let config = SplitButtonConfig::from_attrs(
        host.get_attribute("label").as_deref(),
        host.get_attribute("figma-href").as_deref(),
        host.get_attribute("handoff-href").as_deref(),
    );
    let shadow = match host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open)) {
        Ok(shadow) => shadow,
        Err(err) => {
            log::warn!("split button skipped: {err:?}");
            return None;
        }
    };
    let container = doc.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
    if let Err(err) = shadow.append_child(&container) {
        log::warn!("split button container not attached: {err:?}");
        return None;
    }

    let state = RwSignal::new(Disclosure::new(config.destinations));
    let label = config.label;
    mount_to(container, move || view! { <SplitButton label=label state=state/> }).forget();

    let mut widget = DisclosureWidget::new(state, DocumentPointerHub::new(doc.clone(), host));
    widget.mount();
    Some(widget)
}
