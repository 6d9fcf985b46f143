//! Split button rendered inside a `<split-button>` host's shadow root.
//!
//! DESIGN
//! ======
//! All behavior lives in `state::disclosure`; this component only renders the
//! `Disclosure` held in an `RwSignal` and carries out the effects it returns.
//! Outside-click dismissal is owned by the `DisclosureWidget` the page wiring
//! mounts alongside it.

#[cfg(test)]
#[path = "split_button_test.rs"]
mod split_button_test;

use leptos::html::Button;
use leptos::prelude::*;

use crate::state::disclosure::{Disclosure, DisclosureCell, DisclosureEffect, DisclosureInput, NavKey, dispatch};
use crate::util::dom::open_detached;

const STYLE: &str = "
:host { display: block; width: 100%; }
.group { display: flex; position: relative; width: 100%; }
button { font: inherit; }
.btn { background: var(--primary, #4f46e5); color: #fff; border: none; padding: .5rem .9rem; cursor: pointer; border-radius: 8px 0 0 8px; flex: 1; text-align: center; }
.toggle { background: var(--primary, #4f46e5); color: #fff; border: none; padding: .5rem; width: 42px; cursor: pointer; border-radius: 0 8px 8px 0; border-left: 1px solid rgba(255, 255, 255, .2); }
.btn:focus, .toggle:focus { outline: 3px solid var(--focus, #22c55e); outline-offset: 3px; }
.menu { position: absolute; top: 100%; right: 0; background: var(--card, #111217); color: var(--text, #e5e7eb); border: 1px solid var(--border, #1f2330); border-radius: 8px; padding: .25rem; margin-top: .25rem; min-width: 160px; display: none; z-index: 1000; }
.menu.open { display: block; }
.item { display: block; width: 100%; text-align: left; background: transparent; color: inherit; border: none; padding: .5rem .6rem; border-radius: 6px; cursor: pointer; }
.item:hover { background: rgba(124, 58, 237, .12); }
";

impl DisclosureCell for RwSignal<Disclosure> {
    fn modify<R>(&self, f: impl FnOnce(&mut Disclosure) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn is_open(&self) -> bool {
        self.try_with_untracked(Disclosure::is_open).unwrap_or(false)
    }
}

/// Primary action button with a toggle that opens the destination menu.
#[component]
pub fn SplitButton(label: String, state: RwSignal<Disclosure>) -> impl IntoView {
    let destinations = state.with_untracked(|d| d.destinations().to_vec());
    let toggle_ref = NodeRef::<Button>::new();
    let item_refs = StoredValue::new(
        destinations
            .iter()
            .map(|_| NodeRef::<Button>::new())
            .collect::<Vec<_>>(),
    );

    let run = Callback::new(move |input: DisclosureInput| {
        perform(dispatch(&state, input), toggle_ref, item_refs);
    });

    let on_toggle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "ArrowDown" {
            ev.prevent_default();
            run.run(DisclosureInput::ToggleArrowDown);
        }
    };

    let aria_label = label.clone();
    let items = destinations
        .into_iter()
        .enumerate()
        .map(|(index, dest)| {
            let node_ref = item_refs
                .with_value(|refs| refs.get(index).copied())
                .unwrap_or_default();
            view! {
                <button
                    class="item"
                    role="menuitem"
                    node_ref=node_ref
                    on:click=move |_| run.run(DisclosureInput::ItemSelected(index))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        let Some(key) = NavKey::from_key(&ev.key()) else {
                            return;
                        };
                        if key.prevents_default() {
                            ev.prevent_default();
                        }
                        run.run(DisclosureInput::ItemKey { index, key });
                    }
                >
                    {dest.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <style>{STYLE}</style>
        <div class="group" role="group" aria-label="Split button">
            <button
                class="btn"
                part="button"
                aria-label=aria_label
                on:click=move |_| run.run(DisclosureInput::PrimaryActivated)
            >
                {label}
            </button>
            <button
                class="toggle"
                part="toggle"
                node_ref=toggle_ref
                aria-haspopup="menu"
                aria-expanded=move || expanded_attr(state.with(Disclosure::is_open))
                aria-label="More options"
                title="More options"
                on:click=move |_| run.run(DisclosureInput::ToggleActivated)
                on:keydown=on_toggle_keydown
            >
                "▾"
            </button>
            <div class="menu" part="menu" role="menu" class:open=move || state.with(Disclosure::is_open)>
                {items}
            </div>
        </div>
    }
}

fn expanded_attr(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// When an effect runs relative to the DOM update for the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timing {
    /// Inside the event handler, while user activation is still live.
    Now,
    /// After the menu's `open` class has been rendered; a hidden item
    /// cannot take focus.
    AfterRender,
}

fn timing(effect: &DisclosureEffect) -> Timing {
    match effect {
        DisclosureEffect::OpenDetached(_) => Timing::Now,
        DisclosureEffect::FocusItem(_) | DisclosureEffect::FocusToggle => Timing::AfterRender,
    }
}

fn perform(effects: Vec<DisclosureEffect>, toggle_ref: NodeRef<Button>, item_refs: StoredValue<Vec<NodeRef<Button>>>) {
    for effect in effects {
        match timing(&effect) {
            Timing::Now => run_effect(effect, toggle_ref, item_refs),
            Timing::AfterRender => after_render(move || run_effect(effect, toggle_ref, item_refs)),
        }
    }
}

fn run_effect(effect: DisclosureEffect, toggle_ref: NodeRef<Button>, item_refs: StoredValue<Vec<NodeRef<Button>>>) {
    match effect {
        DisclosureEffect::OpenDetached(href) => open_detached(&href),
        DisclosureEffect::FocusToggle => focus_button(toggle_ref),
        DisclosureEffect::FocusItem(index) => {
            if let Some(node_ref) = item_refs.try_with_value(|refs| refs.get(index).copied()).flatten() {
                focus_button(node_ref);
            }
        }
    }
}

/// Run `f` once pending render effects have been applied to the DOM.
fn after_render(f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    crate::util::dom::next_frame(f);
    #[cfg(not(feature = "csr"))]
    f();
}

fn focus_button(node_ref: NodeRef<Button>) {
    #[cfg(feature = "csr")]
    if let Some(button) = node_ref.get_untracked() {
        if let Err(err) = button.focus() {
            log::debug!("split button focus failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = node_ref;
}
