//! Styled button control.
//!
//! DESIGN
//! ======
//! Appearance comes entirely from [`ControlStyle`]; this component only adds
//! the disabled/loading gate and ARIA state. Extra attributes can be spread
//! onto the underlying `<button>` with `attr:` (e.g. `attr:form="listing"`).

use leptos::prelude::*;

use crate::style::control::{ControlSize, ControlStyle, ControlVariant, Rounding};

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Whether a click should reach the caller's handler.
pub fn should_dispatch(disabled: bool, loading: bool) -> bool {
    !(disabled || loading)
}

/// Button with variant/size/rounding keys. Accepts enums or raw keys
/// (`variant="outline"`); unknown keys render the defaults.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: ControlVariant,
    #[prop(optional, into)] size: ControlSize,
    #[prop(optional, into)] rounding: Rounding,
    /// Extra classes; these win over resolved classes on conflict.
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = ControlStyle { variant, size, rounding }.classes(class.as_deref());
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || !should_dispatch(disabled.get().unwrap_or(false), is_loading());

    view! {
        <button
            class=classes
            type=button_type
            data-variant=variant.to_string()
            data-size=size.to_string()
            disabled=is_disabled
            aria-disabled=move || is_disabled().then_some("true")
            aria-busy=move || is_loading().then_some("true")
            aria-label=aria_label
            on:click=move |ev: leptos::ev::MouseEvent| {
                if is_disabled() {
                    return;
                }
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
