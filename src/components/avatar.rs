//! Avatar showing a user's photo, or their initials when there is none.
//!
//! Both layers are always rendered and toggled with `hidden`, so server HTML
//! already carries the initials. After hydration an effect inspects the
//! `<img>` once: an image that finished loading with no pixels failed before
//! the `error` listener existed, and is treated as a load failure.

use leptos::html::Img;
use leptos::prelude::*;

use crate::state::avatar_image::AvatarImage;
use crate::style::identity::{AvatarSize, DEFAULT_FALLBACK, avatar_classes, initials};

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Round avatar. A missing or broken `src` shows initials derived from
/// `name`, or `fallback` when there is no name.
#[component]
pub fn Avatar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] fallback: Option<char>,
    #[prop(optional, into)] size: AvatarSize,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let image = RwSignal::new(AvatarImage::new(src.as_deref()));
    let label = initials(name.as_deref(), fallback.unwrap_or(DEFAULT_FALLBACK));
    let accessible_name = name.unwrap_or_else(|| label.clone());
    let image_src = image.with_untracked(|img| img.src().map(str::to_owned));
    let classes = avatar_classes(size, class.as_deref());
    let img_ref = NodeRef::<Img>::new();

    let shows_image = move || image.with(AvatarImage::shows_image);
    let fail = move || {
        image.update(|img| {
            if img.mark_failed() {
                log::debug!("avatar image failed to load, showing initials: {:?}", img.src());
            }
        });
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(el) = img_ref.get() else {
            return;
        };
        if AvatarImage::settled_broken(el.complete(), el.natural_width()) {
            fail();
        }
    });

    let alt = accessible_name.clone();
    view! {
        <span
            class=classes
            data-slot="avatar"
            data-state=move || if shows_image() { "image" } else { "fallback" }
        >
            {image_src
                .map(|src| {
                    view! {
                        <img
                            node_ref=img_ref
                            class="avatar__image h-full w-full object-cover"
                            src=src
                            alt=alt
                            hidden=move || !shows_image()
                            on:error=move |_| fail()
                        />
                    }
                })}
            <span
                class="avatar__fallback"
                role="img"
                aria-label=accessible_name
                hidden=shows_image
            >
                {label}
            </span>
        </span>
    }
}
