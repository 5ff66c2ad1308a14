use crate::htmldata::{Html, Node};

/// ## Attribute access
///
/// Attributes only exist on elements. On text and comment nodes, setters do
/// nothing and return `false`, and getters return [`None`].
impl Html {
    /// Set an attribute. See [`Attributes::set`](crate::Attributes::set)
    /// for the rules for `style` and `dir`.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let div = html.new_element("div")?;
    /// assert!(html.set_attribute(div, "ID", "x"));
    /// assert!(html.has_attribute(div, "id"));
    /// assert_eq!(html.attribute(div, "Id"), Some("x"));
    ///
    /// let text = html.new_text("leaf");
    /// assert!(!html.set_attribute(text, "id", "y"));
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn set_attribute<S: Into<String>>(&mut self, node: Node, name: &str, value: S) -> bool {
        match self.element_mut(node) {
            Some(element) => element.set_attribute(name, value),
            None => {
                tracing::debug!(name = name, "ignoring attribute on non-element node");
                false
            }
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.element(node)?.get_attribute(name)
    }

    /// Whether the element has the attribute.
    pub fn has_attribute(&self, node: Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Remove an attribute, returning its value.
    pub fn remove_attribute(&mut self, node: Node, name: &str) -> Option<String> {
        self.element_mut(node)?.remove_attribute(name)
    }

    /// Set the `id` attribute.
    pub fn set_id(&mut self, node: Node, id: &str) -> bool {
        self.set_attribute(node, "id", id)
    }

    /// The `id` attribute.
    pub fn id(&self, node: Node) -> Option<&str> {
        self.attribute(node, "id")
    }

    /// Set the `class` attribute, replacing any existing classes.
    pub fn set_class(&mut self, node: Node, class: &str) -> bool {
        self.set_attribute(node, "class", class)
    }

    /// The `class` attribute.
    pub fn class(&self, node: Node) -> Option<&str> {
        self.attribute(node, "class")
    }

    /// Add a class, or replace all classes if `override_existing` is set.
    ///
    /// A class that is already present is not added again.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let div = html.new_element("div")?;
    /// html.apply_class(div, "a", false);
    /// html.apply_class(div, "b", false);
    /// html.apply_class(div, "a", false);
    /// assert_eq!(html.class(div), Some("a b"));
    /// html.apply_class(div, "c", true);
    /// assert_eq!(html.class(div), Some("c"));
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn apply_class(&mut self, node: Node, class: &str, override_existing: bool) -> bool {
        let class = class.trim();
        if class.is_empty() {
            return false;
        }
        let combined = match self.class(node) {
            Some(existing) if !override_existing && !existing.trim().is_empty() => {
                if existing.split_whitespace().any(|c| c == class) {
                    return true;
                }
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_class(node, &combined)
    }

    /// Set the `title` attribute.
    pub fn set_title(&mut self, node: Node, title: &str) -> bool {
        self.set_attribute(node, "title", title)
    }

    /// Set the `tabindex` attribute.
    pub fn set_tab_index(&mut self, node: Node, tab_index: i32) -> bool {
        self.set_attribute(node, "tabindex", tab_index.to_string())
    }

    /// Set the `dir` attribute. Only `ltr` and `rtl` are accepted.
    pub fn set_dir(&mut self, node: Node, dir: &str) -> bool {
        self.set_attribute(node, "dir", dir)
    }

    /// Set the `name` attribute.
    ///
    /// This does not change the element name; see [`Html::rename`].
    pub fn set_name(&mut self, node: Node, name: &str) -> bool {
        self.set_attribute(node, "name", name)
    }

    /// Merge style declarations into the `style` attribute.
    ///
    /// Existing properties keep their value unless `override_existing` is
    /// set. Declarations with an empty property or value are dropped.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let div = html.new_element("div")?;
    /// html.set_attribute(div, "style", "color:red");
    /// html.set_style(div, [("color", "blue"), ("margin", "0")], false);
    /// assert_eq!(html.attribute(div, "style"), Some("color:red;margin:0;"));
    /// html.set_style(div, [("color", "blue")], true);
    /// assert_eq!(html.attribute(div, "style"), Some("color:blue;margin:0;"));
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn set_style<I, P, V>(&mut self, node: Node, declarations: I, override_existing: bool) -> bool
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let Some(element) = self.element_mut(node) else {
            return false;
        };
        let mut merged = element.attributes().style();
        for (property, value) in declarations {
            let property = property.as_ref().trim();
            let value = value.as_ref().trim();
            match merged.iter_mut().find(|(p, _)| p == property) {
                Some(existing) => {
                    if override_existing {
                        existing.1 = value.to_string();
                    }
                }
                None => merged.push((property.to_string(), value.to_string())),
            }
        }
        element.attributes_mut().set_style(merged)
    }

    /// The `style` attribute as `(property, value)` pairs.
    pub fn style(&self, node: Node) -> Vec<(String, String)> {
        self.attributes(node)
            .map(|attributes| attributes.style())
            .unwrap_or_default()
    }
}
