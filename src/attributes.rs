use indexmap::IndexMap;

/// Attributes of an element.
///
/// Names are case-folded to lowercase when written and when looked up.
/// Insertion order is preserved, which is also serialization order.
///
/// A few names get special treatment:
///
/// - `style` is split into `property:value` declarations. Declarations with
///   an empty property or value are dropped and the rest are written back
///   as `property:value;` each. If nothing remains, the attribute is removed.
/// - `dir` only accepts `ltr` or `rtl` (in any case).
///
/// An attribute with an empty value is a boolean attribute: it is rendered as
/// its bare name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    ///
    /// Returns `true` if the attribute holds a value afterwards. Names that
    /// are empty after trimming are ignored, and so are names containing
    /// whitespace, control characters or any of `" ' < > / =`.
    ///
    /// ```rust
    /// use htmlnode::Attributes;
    ///
    /// let mut attributes = Attributes::new();
    /// assert!(attributes.set("ID", "main"));
    /// assert_eq!(attributes.get("id"), Some("main"));
    ///
    /// attributes.set("style", "color:red;background:blue");
    /// assert_eq!(attributes.get("style"), Some("color:red;background:blue;"));
    ///
    /// assert!(!attributes.set("dir", "up"));
    /// assert!(!attributes.has("dir"));
    /// ```
    pub fn set<S: Into<String>>(&mut self, name: &str, value: S) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if !is_attribute_name(name) {
            tracing::debug!(name = %name, "ignoring invalid attribute name");
            return false;
        }
        let name = name.to_lowercase();
        let value = value.into();
        match name.as_str() {
            "style" => {
                let declarations = parse_style(&value);
                self.set_style_declarations(declarations)
            }
            "dir" => {
                if value.eq_ignore_ascii_case("ltr") || value.eq_ignore_ascii_case("rtl") {
                    self.map.insert(name, value.to_ascii_lowercase());
                    true
                } else {
                    tracing::debug!(value = %value, "ignoring invalid dir value");
                    false
                }
            }
            _ => {
                self.map.insert(name, value);
                true
            }
        }
    }

    /// Set the `style` attribute from `(property, value)` pairs.
    ///
    /// Pairs with an empty property or value are dropped; if no pair is left
    /// the `style` attribute is removed.
    pub fn set_style<I, P, V>(&mut self, declarations: I) -> bool
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let mut collected = IndexMap::new();
        for (property, value) in declarations {
            add_declaration(&mut collected, property.as_ref(), value.as_ref());
        }
        self.set_style_declarations(collected)
    }

    fn set_style_declarations(&mut self, declarations: IndexMap<String, String>) -> bool {
        if declarations.is_empty() {
            self.map.shift_remove("style");
            return false;
        }
        let mut serialized = String::new();
        for (property, value) in &declarations {
            serialized.push_str(property);
            serialized.push(':');
            serialized.push_str(value);
            serialized.push(';');
        }
        self.map.insert("style".to_string(), serialized);
        true
    }

    /// The `style` attribute decomposed into `(property, value)` pairs.
    pub fn style(&self) -> Vec<(String, String)> {
        self.get("style")
            .map(|style| parse_style(style).into_iter().collect())
            .unwrap_or_default()
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if let Some(value) = self.map.get(name) {
            return Some(value.as_str());
        }
        self.map.get(&name.to_lowercase()).map(|value| value.as_str())
    }

    /// Whether an attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove an attribute, returning its value if it was present.
    ///
    /// The order of the remaining attributes is kept.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.shift_remove(&name.trim().to_lowercase())
    }

    /// Remove all attributes.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(|name| name.as_str())
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

fn add_declaration(declarations: &mut IndexMap<String, String>, property: &str, value: &str) {
    let property = property.trim();
    let value = value.trim();
    if property.is_empty() || value.is_empty() {
        return;
    }
    declarations.insert(property.to_string(), value.to_string());
}

fn is_attribute_name(name: &str) -> bool {
    !name.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
    })
}

pub(crate) fn parse_style(style: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();
    for declaration in style.split(';') {
        if let Some((property, value)) = declaration.split_once(':') {
            add_declaration(&mut declarations, property, value);
        }
    }
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        let declarations = parse_style(" color : red ;; :blue; width: ;height:10px");
        assert_eq!(
            declarations.into_iter().collect::<Vec<_>>(),
            vec![
                ("color".to_string(), "red".to_string()),
                ("height".to_string(), "10px".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_style_value_with_colon() {
        let declarations = parse_style("background:url(http://example.com/a.png)");
        assert_eq!(
            declarations.get("background").map(|s| s.as_str()),
            Some("url(http://example.com/a.png)")
        );
    }

    #[test]
    fn test_style_later_declaration_wins() {
        let mut attributes = Attributes::new();
        attributes.set("style", "color:red;margin:0;color:blue");
        assert_eq!(attributes.get("style"), Some("color:blue;margin:0;"));
    }
}
