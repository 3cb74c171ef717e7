//! Router-aware "back" link styled like a ghost button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icon::{Icon, IconName};
use crate::style::control::{ControlSize, ControlStyle, ControlVariant};

const DEFAULT_LABEL: &str = "Back";

/// Link to `href` with a leading chevron. Must render inside a `<Router>`.
#[component]
pub fn BackLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let style = ControlStyle {
        variant: ControlVariant::Ghost,
        size: ControlSize::Sm,
        ..ControlStyle::default()
    };
    let classes = style.classes(class.as_deref());
    let label = label.unwrap_or_else(|| DEFAULT_LABEL.to_owned());

    view! {
        <A href=href attr:class=classes>
            <Icon name=IconName::ChevronLeft />
            <span>{label}</span>
        </A>
    }
}
