//! Root component: a gallery of every kit control, plus the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::avatar::Avatar;
use crate::components::back_link::BackLink;
use crate::components::button::Button;
use crate::components::icon::{Icon, IconName};
use crate::components::theme_toggle::ThemeToggle;
use crate::style::StyleKey;
use crate::style::control::{ControlSize, ControlVariant, Rounding};
use crate::style::identity::AvatarSize;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/rental-ui.css"/>
        <Title text="Rental UI kit"/>

        <Router>
            <main class="kit-gallery mx-auto flex max-w-4xl flex-col gap-10 p-8">
                <header class="flex items-center justify-between">
                    <BackLink href="/" label="Dashboard"/>
                    <h1 class="text-2xl font-semibold">"Component kit"</h1>
                    <ThemeToggle/>
                </header>
                <ButtonSection/>
                <AvatarSection/>
                <AccordionSection/>
            </main>
        </Router>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    view! {
        <section class="kit-gallery__section flex flex-col gap-4">
            <h2 class="text-lg font-medium">"Buttons"</h2>
            <div class="flex flex-wrap gap-2">
                {ControlVariant::ALL
                    .iter()
                    .map(|&variant| view! { <Button variant=variant>{variant.key()}</Button> })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap items-center gap-2">
                {ControlSize::ALL
                    .iter()
                    .filter(|&&size| size != ControlSize::Icon)
                    .map(|&size| view! { <Button size=size variant="outline">{size.key()}</Button> })
                    .collect_view()}
                <Button size=ControlSize::Icon aria_label="Add listing">
                    <Icon name=IconName::Plus/>
                </Button>
            </div>
            <div class="flex flex-wrap gap-2">
                {Rounding::ALL
                    .iter()
                    .map(|&rounding| view! { <Button rounding=rounding variant="secondary">{rounding.key()}</Button> })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-2">
                <Button variant="danger" disabled=true>"Suspend host"</Button>
                <Button loading=true>"Publishing..."</Button>
                <Button variant="sparkly" class="bg-emerald-600 hover:bg-emerald-500">"Approve listing"</Button>
            </div>
        </section>
    }
}

#[component]
fn AvatarSection() -> impl IntoView {
    view! {
        <section class="kit-gallery__section flex flex-col gap-4">
            <h2 class="text-lg font-medium">"Avatars"</h2>
            <div class="flex items-center gap-3">
                <Avatar name="Alex Johnson" size=AvatarSize::Sm/>
                <Avatar name="Madonna"/>
                <Avatar src="/img/avatars/missing.png" name="Priya Patel" size="lg"/>
                <Avatar fallback='#' size=AvatarSize::Xl/>
            </div>
        </section>
    }
}

#[component]
fn AccordionSection() -> impl IntoView {
    view! {
        <section class="kit-gallery__section flex flex-col gap-4">
            <h2 class="text-lg font-medium">"Accordion"</h2>
            <Accordion>
                <AccordionItem id="faq-payouts" title="When are host payouts released?" default_open=true>
                    "Payouts are released 24 hours after guest check-in."
                </AccordionItem>
                <AccordionItem id="faq-cancellation" title="How are cancellations refunded?">
                    "Refunds follow the cancellation policy selected on the listing."
                </AccordionItem>
                <AccordionItem id="faq-verification" title="Do guests need to verify their identity?">
                    "Guests verify a government ID before their first booking."
                </AccordionItem>
            </Accordion>
        </section>
    }
}
