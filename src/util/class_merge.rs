//! Class-name composition with later-wins conflict resolution.
//!
//! DESIGN
//! ======
//! Utility tokens are bucketed into conflict groups (padding axis, background,
//! text colour, text size, ...). When a later token lands in a group that an
//! earlier token occupies, the earlier token is dropped. Variant prefixes
//! (`hover:`, `disabled:`, `md:`) are part of the group key, so `bg-red-500`
//! and `hover:bg-red-600` never conflict.
//!
//! TRADE-OFFS
//! ==========
//! Only the utilities the kit actually emits are classified. Anything else is
//! treated as an opaque class and merely deduplicated, which is the safe
//! choice for arbitrary caller classes such as `property-card__title`.
//! Arbitrary values in ambiguous families (`text-[14px]`) are opaque too.

#[cfg(test)]
#[path = "class_merge_test.rs"]
mod class_merge_test;

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden", "contents", "table",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Prefix-matched groups, checked in order. Longer prefixes come first so
/// `px-` wins over `p-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("bg-", "bg"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("opacity-", "opacity"),
    ("cursor-", "cursor"),
    ("items-", "items"),
    ("justify-", "justify"),
];

/// Groups an incoming token of the given group also clears.
fn cleared_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["p", "px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["px", "pr", "pl"],
        "py" => &["py", "pt", "pb"],
        "m" => &["m", "mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mx", "mr", "ml"],
        "my" => &["my", "mt", "mb"],
        "size" => &["size", "w", "h"],
        "gap" => &["gap", "gap-x", "gap-y"],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Group {
    Known(&'static str),
    Opaque(String),
}

#[derive(Debug)]
struct Entry<'a> {
    variant: &'a str,
    group: Group,
    token: &'a str,
}

/// Merge class strings left to right; later tokens override earlier ones in
/// the same conflict group.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<Entry<'a>> = Vec::new();

    for token in parts.into_iter().flat_map(str::split_whitespace) {
        let (variant, base) = split_variant(token);
        let group = classify(base);
        entries.retain(|existing| !conflicts(existing, variant, &group));
        entries.push(Entry { variant, group, token });
    }

    entries
        .iter()
        .map(|entry| entry.token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `hover:bg-red-500` into (`hover:`, `bg-red-500`). Colons inside
/// arbitrary values (`bg-[url(https://x)]`) are not separators.
fn split_variant(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;
    for (idx, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(idx),
            _ => {}
        }
    }
    match split {
        Some(idx) => token.split_at(idx + 1),
        None => ("", token),
    }
}

/// Families whose arbitrary values are ambiguous without type hints:
/// `text-[14px]` is a size, `text-[#333]` a colour.
const AMBIGUOUS_ARBITRARY: &[&str] = &["text-", "font-", "border-"];

fn conflicts(existing: &Entry<'_>, variant: &str, incoming: &Group) -> bool {
    if existing.variant != variant {
        return false;
    }
    match (incoming, &existing.group) {
        (Group::Known(new), Group::Known(old)) => new == old || cleared_groups(new).contains(old),
        (Group::Opaque(new), Group::Opaque(old)) => new == old,
        _ => false,
    }
}

fn classify(base: &str) -> Group {
    if base.contains('[') && AMBIGUOUS_ARBITRARY.iter().any(|prefix| base.starts_with(prefix)) {
        return Group::Opaque(base.to_owned());
    }
    if DISPLAY.contains(&base) {
        return Group::Known("display");
    }
    if let Some(rest) = base.strip_prefix("text-") {
        return Group::Known(if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = base.strip_prefix("font-") {
        return Group::Known(if FONT_WEIGHTS.contains(&rest) { "font-weight" } else { "font-family" });
    }
    if base == "rounded" || base.strip_prefix("rounded-").is_some_and(is_rounding_size) {
        return Group::Known("rounded");
    }
    if base == "shadow" || base.strip_prefix("shadow-").is_some_and(|rest| SHADOW_SIZES.contains(&rest)) {
        return Group::Known("shadow");
    }
    if let Some(group) = classify_border(base) {
        return Group::Known(group);
    }
    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| base.starts_with(*prefix))
        .map_or_else(|| Group::Opaque(base.to_owned()), |&(_, group)| Group::Known(group))
}

fn is_rounding_size(rest: &str) -> bool {
    matches!(rest, "none" | "sm" | "md" | "lg" | "xl" | "2xl" | "3xl" | "full")
}

fn classify_border(base: &str) -> Option<&'static str> {
    if base == "border" {
        return Some("border-width");
    }
    let rest = base.strip_prefix("border-")?;
    if rest.chars().all(|c| c.is_ascii_digit()) {
        Some("border-width")
    } else if BORDER_STYLES.contains(&rest) {
        Some("border-style")
    } else if is_side_width(rest) {
        // Side-specific widths (`border-t`, `border-x-2`) stay opaque.
        None
    } else {
        Some("border-color")
    }
}

fn is_side_width(rest: &str) -> bool {
    let (side, width) = rest.split_once('-').unwrap_or((rest, ""));
    matches!(side, "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e") && width.chars().all(|c| c.is_ascii_digit())
}
