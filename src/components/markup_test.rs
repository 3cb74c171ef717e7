//! Server-render helpers shared by component tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a view to HTML inside a fresh reactive owner.
pub(crate) fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}

/// The opening tag (`<tag ...>`) of the first element whose markup contains
/// `marker`.
pub(crate) fn open_tag<'a>(html: &'a str, marker: &str) -> &'a str {
    let Some(at) = html.find(marker) else {
        return "";
    };
    let start = if marker.starts_with('<') { at } else { html[..at].rfind('<').unwrap_or(0) };
    let end = html[at..].find('>').map_or(html.len(), |i| at + i + 1);
    &html[start..end]
}

/// Whether an opening tag carries the boolean `hidden` attribute.
pub(crate) fn is_hidden(tag: &str) -> bool {
    tag.split(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .any(|part| part == "hidden" || part.starts_with("hidden="))
}
