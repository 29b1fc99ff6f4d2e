//! Hash-tagged filenames

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Sentinel opening the hash field, including the `M` marker
pub const TAG_OPEN: &str = "._.M";

/// Sentinel closing the hash field, before the extension
pub const TAG_CLOSE: &str = "._.";

#[allow(clippy::expect_used)]
static HASH_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\._\.M(?P<hash>[0-9a-z]+)\._\.").expect("hash tag pattern is valid")
});

/// Whether `name` already carries a hash tag
#[must_use]
pub fn is_tagged(name: &str) -> bool {
    HASH_TAG.is_match(name)
}

/// Whether `name` is a dot-file
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Remove hash tags from `name` for display.
///
/// `photo._.Mabc._.jpg` becomes `photo.jpg`; a tag at the very end of the
/// name (no extension) is dropped, so `notes._.Mabc._.` becomes `notes`.
#[must_use]
pub fn strip_tag(name: &str) -> Cow<'_, str> {
    HASH_TAG.replace_all(name, |caps: &Captures<'_>| {
        let at_end = caps.get(0).is_some_and(|m| m.end() == name.len());
        if at_end { "" } else { "." }
    })
}

/// Split `name` into stem and extension at its last dot.
///
/// Leading dots belong to the stem and the returned extension has no dot,
/// so `archive.tar.gz` gives `("archive.tar", "gz")` and `.profile` gives
/// `(".profile", "")`.
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => {
            let dot = leading + idx;
            (&name[..dot], &name[dot + 1..])
        }
        None => (name, ""),
    }
}

/// A filename with an embedded content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedFilename {
    pub stem: String,
    pub hash: String,
    pub extension: String,
}

impl HashedFilename {
    /// Tag `original_name` with `hash`
    #[must_use]
    pub fn new(original_name: &str, hash: impl Into<String>) -> Self {
        let (stem, extension) = split_extension(original_name);
        Self {
            stem: stem.to_string(),
            hash: hash.into(),
            extension: extension.to_string(),
        }
    }

    /// Parse an already tagged name back into its parts
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let caps = HASH_TAG.captures(name)?;
        let whole = caps.get(0)?;
        let hash = caps.name("hash")?;
        Some(Self {
            stem: name[..whole.start()].to_string(),
            hash: hash.as_str().to_string(),
            extension: name[whole.end()..].to_string(),
        })
    }

    /// The name a reader would expect without the tag
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.extension.is_empty() {
            self.stem.clone()
        } else {
            format!("{}.{}", self.stem, self.extension)
        }
    }
}

impl fmt::Display for HashedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TAG_OPEN}{}{TAG_CLOSE}{}",
            self.stem, self.hash, self.extension
        )
    }
}
