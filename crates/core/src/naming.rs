//! Derived-name generation for catalog writes.
//!
//! Head variant names are regenerated from the referenced components on
//! every combination-affecting write; operators never author them
//! directly. Component slugs are derived from display names on create.

/// Shank part of a head's internal name when the head spans several
/// shanks.
pub const MULTI_SHANK_KEY: &str = "multi";

/// Internal (slug) name for a head variant:
/// `{shank}_{style}_{shape}_{carat}` over internal names, lowercased.
/// Multi-shank heads use [`MULTI_SHANK_KEY`] for the shank part.
pub fn head_internal_name(shank_internal_names: &[&str], style: &str, shape: &str, carat: &str) -> String {
    let shank_part = match shank_internal_names {
        [] => "unknown",
        [single] => single,
        _ => MULTI_SHANK_KEY,
    };
    format!("{shank_part}_{style}_{shape}_{carat}").to_lowercase()
}

/// Display name for a head variant:
/// `{Shank} / {Style} / {Shape} / {Carat}` over display names.
/// Multi-shank heads join the shank display names with `" + "`.
pub fn head_display_name(shank_display_names: &[&str], style: &str, shape: &str, carat: &str) -> String {
    let shank_part = match shank_display_names {
        [] => "Shank".to_string(),
        [single] => (*single).to_string(),
        many => many.join(" + "),
    };
    format!("{shank_part} / {style} / {shape} / {carat}")
}

/// Derive a URL-safe slug from a display name: lowercase, keep only
/// ASCII alphanumerics, spaces, and hyphens, turn whitespace runs into
/// single hyphens, collapse hyphen runs, trim hyphens. Characters outside
/// that set (including non-ASCII letters) are dropped.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for ch in lowered.trim().chars() {
        let mapped = if ch.is_whitespace() || ch == '-' {
            None
        } else if ch.is_ascii_alphanumeric() {
            Some(ch)
        } else {
            continue;
        };
        match mapped {
            Some(c) => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            None => pending_hyphen = true,
        }
    }
    slug
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
