use ahash::{HashSet, HashSetExt};

const VOID_NAMES: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Registry of void element names.
///
/// A void element has no closing tag and never has children. The registry
/// is fixed once it is handed to [`Html`](crate::Html); the parser and the
/// element constructors consult it. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElements {
    names: HashSet<String>,
}

impl VoidElements {
    /// The standard HTML void elements plus the given custom tag names.
    ///
    /// ```rust
    /// use htmlnode::VoidElements;
    ///
    /// let void_elements = VoidElements::with_extra(&["my-icon"]);
    /// assert!(void_elements.contains("MY-ICON"));
    /// assert!(void_elements.contains("br"));
    /// ```
    pub fn with_extra(extra: &[&str]) -> Self {
        let mut names = HashSet::with_capacity(VOID_NAMES.len() + extra.len());
        for name in VOID_NAMES.iter().chain(extra.iter()) {
            names.insert(name.trim().to_ascii_lowercase());
        }
        Self { names }
    }

    /// Whether `name` is a void element name.
    pub fn contains(&self, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        self.names.contains(&name.to_ascii_lowercase())
    }

    /// Iterate over the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_str())
    }
}

impl Default for VoidElements {
    fn default() -> Self {
        Self::with_extra(&[])
    }
}
