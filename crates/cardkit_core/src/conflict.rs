//! Utility class conflict groups
//!
//! Two utilities conflict when they set the same CSS property under the same
//! variant prefix: `px-2.5` and `px-2`, or `hover:bg-secondary` and
//! `hover:bg-white`. `bg-white` and `dark:bg-gray-800` never conflict because
//! their variants differ.
//!
//! Some groups cover others: a later `py-3` replaces an earlier `pt-0`, while
//! a later `pt-0` leaves an earlier `py-3` in place.

/// What a token is checked against when merging
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ConflictKey<'a> {
    variants: &'a str,
    important: bool,
    group: &'static str,
}

impl ConflictKey<'_> {
    /// True when a token with this key replaces one with `earlier`
    pub(crate) fn overrides(&self, earlier: &ConflictKey<'_>) -> bool {
        self.variants == earlier.variants
            && self.important == earlier.important
            && (self.group == earlier.group || covered_groups(self.group).contains(&earlier.group))
    }
}

/// Classify a token; `None` for classes outside the known groups
pub(crate) fn conflict_key(token: &str) -> Option<ConflictKey<'_>> {
    let (variants, utility) = split_variants(token);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    let group = group_of(utility)?;
    Some(ConflictKey {
        variants,
        important,
        group,
    })
}

/// `dark:hover:bg-white` -> (`dark:hover:`, `bg-white`), ignoring `:` inside
/// arbitrary values
fn split_variants(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = 0;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = i + 1,
            _ => {}
        }
    }
    token.split_at(split)
}

fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &["rounded-side"],
        "size" => &["w", "h"],
        _ => &[],
    }
}

fn is_length(value: &str) -> bool {
    if value.starts_with('[') {
        return true;
    }
    matches!(value, "px" | "full" | "auto")
        || (!value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == '/'))
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "hidden",
    "table",
    "contents",
    "flow-root",
    "list-item",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const ROUNDED_SIDES: &[&str] = &[
    "t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl", "ss", "se", "es", "ee",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none", "hidden"];

fn group_of(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }

    let group = match utility {
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "truncate" => "text-overflow",
        "shrink" => "flex-shrink",
        "grow" => "flex-grow",
        "transition" => "transition",
        "shadow" => "shadow",
        "rounded" => "rounded",
        "border" => "border-width",
        "ring" => "ring-width",
        "outline" => "outline-style",
        _ => return prefixed_group(utility),
    };
    Some(group)
}

fn prefixed_group(utility: &str) -> Option<&'static str> {
    let (prefix, value) = utility.split_once('-')?;

    let group = match prefix {
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" | "ps" | "pe" | "m" | "mx" | "my"
        | "mt" | "mr" | "mb" | "ml" | "ms" | "me" | "w" | "h" | "size" | "z" | "opacity"
        | "leading" | "tracking" | "duration" | "ease" | "delay" | "aspect" | "cursor"
        | "whitespace" | "items" | "order" => static_prefix(prefix),
        "min" | "max" => {
            let (axis, _) = value.split_once('-')?;
            match (prefix, axis) {
                ("min", "w") => "min-w",
                ("min", "h") => "min-h",
                ("max", "w") => "max-w",
                ("max", "h") => "max-h",
                _ => return None,
            }
        }
        "gap" => match value.split_once('-') {
            Some(("x", _)) => "gap-x",
            Some(("y", _)) => "gap-y",
            _ => "gap",
        },
        "space" => match value.split_once('-') {
            Some(("x", _)) => "space-x",
            Some(("y", _)) => "space-y",
            _ => return None,
        },
        "overflow" => match value.split_once('-') {
            Some(("x", _)) => "overflow-x",
            Some(("y", _)) => "overflow-y",
            _ => "overflow",
        },
        "flex" => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        },
        "shrink" => "flex-shrink",
        "grow" => "flex-grow",
        "justify" => match value.split_once('-') {
            Some(("items", _)) => "justify-items",
            Some(("self", _)) => "justify-self",
            _ => "justify-content",
        },
        "self" => "align-self",
        "content" => "align-content",
        "text" => {
            if FONT_SIZES.contains(&value) || value.starts_with('[') {
                "font-size"
            } else if matches!(value, "left" | "center" | "right" | "justify" | "start" | "end") {
                "text-align"
            } else if matches!(value, "wrap" | "nowrap" | "balance" | "pretty") {
                "text-wrap"
            } else if matches!(value, "ellipsis" | "clip") {
                "text-overflow"
            } else if value.starts_with("opacity-") {
                "text-opacity"
            } else {
                "text-color"
            }
        }
        "font" => {
            if FONT_WEIGHTS.contains(&value) {
                "font-weight"
            } else {
                "font-family"
            }
        }
        "bg" => {
            if value.starts_with("opacity-") {
                "bg-opacity"
            } else if value.starts_with("gradient-") || value == "none" {
                "bg-image"
            } else if matches!(value, "fixed" | "local" | "scroll") {
                "bg-attachment"
            } else if value.starts_with("clip-") {
                "bg-clip"
            } else if value.starts_with("origin-") {
                "bg-origin"
            } else if value.starts_with("repeat") || value == "no-repeat" {
                "bg-repeat"
            } else if matches!(value, "auto" | "cover" | "contain") {
                "bg-size"
            } else if matches!(
                value,
                "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
                    | "right-top" | "right-bottom"
            ) {
                "bg-position"
            } else {
                "bg-color"
            }
        }
        "from" => "gradient-from",
        "via" => "gradient-via",
        "to" => "gradient-to",
        "shadow" => {
            if SHADOW_SIZES.contains(&value) {
                "shadow"
            } else {
                "shadow-color"
            }
        }
        "rounded" => {
            let side = value.split_once('-').map_or(value, |(side, _)| side);
            if ROUNDED_SIDES.contains(&side) {
                "rounded-side"
            } else {
                "rounded"
            }
        }
        "border" => {
            if is_length(value) {
                "border-width"
            } else if BORDER_STYLES.contains(&value) {
                "border-style"
            } else if value.starts_with("opacity-") {
                "border-opacity"
            } else {
                let side = value.split_once('-').map_or(value, |(side, _)| side);
                if matches!(side, "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e") {
                    // Side widths and colors are left alone.
                    return None;
                }
                "border-color"
            }
        }
        "ring" => {
            if is_length(value) {
                "ring-width"
            } else if value == "inset" {
                "ring-inset"
            } else if let Some(offset) = value.strip_prefix("offset-") {
                if is_length(offset) {
                    "ring-offset-width"
                } else {
                    "ring-offset-color"
                }
            } else {
                "ring-color"
            }
        }
        "outline" => {
            if is_length(value) {
                "outline-width"
            } else if matches!(value, "none" | "dashed" | "dotted" | "double") {
                "outline-style"
            } else if value.starts_with("offset-") {
                "outline-offset"
            } else {
                "outline-color"
            }
        }
        "transition" => "transition",
        "select" => "user-select",
        "pointer" => "pointer-events",
        _ => return None,
    };
    Some(group)
}

fn static_prefix(prefix: &str) -> &'static str {
    match prefix {
        "p" => "p",
        "px" => "px",
        "py" => "py",
        "pt" => "pt",
        "pr" => "pr",
        "pb" => "pb",
        "pl" => "pl",
        "ps" => "ps",
        "pe" => "pe",
        "m" => "m",
        "mx" => "mx",
        "my" => "my",
        "mt" => "mt",
        "mr" => "mr",
        "mb" => "mb",
        "ml" => "ml",
        "ms" => "ms",
        "me" => "me",
        "w" => "w",
        "h" => "h",
        "size" => "size",
        "z" => "z",
        "opacity" => "opacity",
        "leading" => "leading",
        "tracking" => "tracking",
        "duration" => "duration",
        "ease" => "ease",
        "delay" => "delay",
        "aspect" => "aspect",
        "cursor" => "cursor",
        "whitespace" => "whitespace",
        "items" => "align-items",
        _ => "order",
    }
}
