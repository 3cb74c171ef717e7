use super::*;

#[test]
fn enabled_button_dispatches() {
    assert!(should_dispatch(false, false));
}

#[test]
fn disabled_or_loading_button_swallows_clicks() {
    assert!(!should_dispatch(true, false));
    assert!(!should_dispatch(false, true));
    assert!(!should_dispatch(true, true));
}

#[cfg(feature = "ssr")]
mod markup {
    use super::*;
    use crate::components::markup_test::{open_tag, render};

    fn has_disabled(tag: &str) -> bool {
        tag.split(|c: char| c.is_whitespace() || c == '>')
            .any(|part| part == "disabled" || part.starts_with("disabled="))
    }

    #[test]
    fn enabled_button_has_no_disabled_state() {
        let html = render(|| view! { <Button variant="outline">"Save"</Button> });
        let tag = open_tag(&html, "<button");
        assert!(!has_disabled(tag), "{tag}");
        assert!(!tag.contains("aria-disabled"), "{tag}");
        assert!(tag.contains(r#"data-variant="outline""#), "{tag}");
        assert!(tag.contains(r#"type="button""#), "{tag}");
    }

    #[test]
    fn disabled_button_marks_aria_disabled() {
        let html = render(|| view! { <Button disabled=true>"Save"</Button> });
        let tag = open_tag(&html, "<button");
        assert!(has_disabled(tag), "{tag}");
        assert!(tag.contains(r#"aria-disabled="true""#), "{tag}");
    }

    #[test]
    fn loading_button_is_busy_and_disabled() {
        let html = render(|| view! { <Button loading=true>"Publishing"</Button> });
        let tag = open_tag(&html, "<button");
        assert!(has_disabled(tag), "{tag}");
        assert!(tag.contains(r#"aria-disabled="true""#), "{tag}");
        assert!(tag.contains(r#"aria-busy="true""#), "{tag}");
    }

    #[test]
    fn unknown_variant_key_renders_default_classes() {
        let html = render(|| view! { <Button variant="sparkly">"Go"</Button> });
        let tag = open_tag(&html, "<button");
        assert!(tag.contains(r#"data-variant="primary""#), "{tag}");
        assert!(tag.contains("bg-indigo-600"), "{tag}");
    }
}
