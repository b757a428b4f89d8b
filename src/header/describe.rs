//! # Header Descriptions
//!
//! Lookup table for the human-readable text in a header's comment block.
//! Keys are matched case-insensitively against either an explicit context
//! tag (`main-menu`) or the image's logical stem (`mm`). Anything not in the
//! table gets a generic description built from the stem.

use std::borrow::Cow;

/// Text placed in the comment block of a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// What the image shows, e.g. "main menu screen"
    pub title: Cow<'static, str>,
    /// Which resource group the image belongs to
    pub role: Cow<'static, str>,
}

struct KnownImage {
    keys: &'static [&'static str],
    title: &'static str,
    role: &'static str,
}

const KNOWN_IMAGES: &[KnownImage] = &[
    KnownImage {
        keys: &["mm", "main-menu"],
        title: "main menu screen",
        role: "main screen resource",
    },
    KnownImage {
        keys: &["sm", "status-map"],
        title: "menu status map",
        role: "status map resource",
    },
];

/// List the context tags accepted by [`describe`].
pub fn list_tags() -> impl Iterator<Item = &'static str> {
    KNOWN_IMAGES
        .iter()
        .flat_map(|k| k.keys.iter().copied())
        .filter(|k| k.contains('-'))
}

fn lookup(key: &str) -> Option<&'static KnownImage> {
    let key = key.to_ascii_lowercase();
    KNOWN_IMAGES
        .iter()
        .find(|k| k.keys.iter().any(|candidate| *candidate == key))
}

/// Describe an image. An explicit `tag` wins over the stem; unknown tags fall
/// back to the stem lookup.
pub fn describe(stem: &str, tag: Option<&str>) -> Description {
    let known = tag.and_then(lookup).or_else(|| lookup(stem));
    match known {
        Some(k) => Description {
            title: Cow::Borrowed(k.title),
            role: Cow::Borrowed(k.role),
        },
        None => Description {
            title: Cow::Owned(stem.to_string()),
            role: Cow::Borrowed("image resource"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_stem() {
        let d = describe("mm", None);
        assert_eq!(d.title, "main menu screen");
        let d = describe("SM", None);
        assert_eq!(d.title, "menu status map");
    }

    #[test]
    fn test_describe_tag_overrides_stem() {
        let d = describe("background", Some("status-map"));
        assert_eq!(d.title, "menu status map");
    }

    #[test]
    fn test_describe_unknown_tag_falls_back_to_stem() {
        let d = describe("mm", Some("splash"));
        assert_eq!(d.title, "main menu screen");
    }

    #[test]
    fn test_describe_generic() {
        let d = describe("logo", None);
        assert_eq!(d.title, "logo");
        assert_eq!(d.role, "image resource");
    }

    #[test]
    fn test_list_tags() {
        let tags: Vec<_> = list_tags().collect();
        assert_eq!(tags, vec!["main-menu", "status-map"]);
    }
}
