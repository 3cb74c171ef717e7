//! Accordion container and independently toggled disclosure items.
//!
//! ARCHITECTURE
//! ============
//! Each item owns one `RwSignal<Disclosure>`. Every ARIA and visual attribute
//! is derived from that signal, so `aria-expanded`, `data-state` and the
//! panel's `hidden` flag always move together. The panel stays mounted while
//! collapsed so `aria-controls` always points at a real element.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::state::disclosure::{Disclosure, DisclosureIds};
use crate::util::class_merge::merge_classes;

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

const ACCORDION_BASE: &str = "w-full divide-y divide-gray-200 rounded-md border border-gray-200";
const ITEM_BASE: &str = "accordion-item px-4";

/// Groups accordion items. Items do not coordinate; several may be open.
#[component]
pub fn Accordion(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let classes = merge_classes([ACCORDION_BASE, class.as_deref().unwrap_or_default()]);
    view! {
        <div class=classes data-slot="accordion">
            {children()}
        </div>
    }
}

/// One collapsible question/answer pair.
///
/// `id` seeds the trigger and panel element ids (`{id}-trigger`,
/// `{id}-panel`) and must be unique on the page.
#[component]
pub fn AccordionItem(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(Disclosure::new(default_open));
    let DisclosureIds { trigger, panel } = DisclosureIds::new(&id);
    let classes = merge_classes([ITEM_BASE, class.as_deref().unwrap_or_default()]);

    let data_state = move || state.get().data_state();
    let on_toggle = move |_: leptos::ev::MouseEvent| {
        state.update(|s| {
            s.toggle();
        });
    };

    view! {
        <div class=classes data-state=data_state>
            <h3 class="accordion-item__heading flex">
                <button
                    id=trigger.clone()
                    type="button"
                    class="accordion-item__trigger flex flex-1 items-center justify-between py-4 text-left font-medium hover:underline"
                    aria-expanded=move || state.get().aria_expanded()
                    aria-controls=panel.clone()
                    data-state=data_state
                    on:click=on_toggle
                >
                    <span>{title}</span>
                    <span
                        class="accordion-item__chevron transition-transform duration-200"
                        class:rotate-180=move || state.get().is_open()
                    >
                        <Icon name=IconName::ChevronDown />
                    </span>
                </button>
            </h3>
            <div
                id=panel
                role="region"
                aria-labelledby=trigger
                class="accordion-item__panel pb-4 text-sm text-gray-600"
                data-state=data_state
                hidden=move || state.get().panel_hidden()
            >
                {children()}
            </div>
        </div>
    }
}
