use htmlnode::{Attributes, Html};
use rstest::rstest;

#[test]
fn test_case_folding() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    assert!(html.set_attribute(div, "ID", "x"));
    assert!(html.has_attribute(div, "id"));
    assert_eq!(html.attribute(div, "Id"), Some("x"));
    assert_eq!(html.to_html(div, false, 0), r#"<div id="x"></div>"#);
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_empty_name_is_rejected(#[case] name: &str) {
    let mut attributes = Attributes::new();
    assert!(!attributes.set(name, "value"));
    assert!(attributes.is_empty());
}

#[test]
fn test_insertion_order() {
    let mut html = Html::new();
    let a = html.new_element("a").unwrap();
    html.set_attribute(a, "href", "/x");
    html.set_attribute(a, "class", "link");
    html.set_attribute(a, "target", "_blank");
    html.set_attribute(a, "href", "/y");
    assert_eq!(
        html.to_html(a, false, 0),
        r#"<a href="/y" class="link" target="_blank"></a>"#
    );
    assert_eq!(
        html.remove_attribute(a, "CLASS"),
        Some("link".to_string())
    );
    assert_eq!(
        html.attributes(a).unwrap().names().collect::<Vec<_>>(),
        vec!["href", "target"]
    );
}

#[rstest]
#[case("color:red;background:blue", Some("color:red;background:blue;"))]
#[case("color:red;background:blue;", Some("color:red;background:blue;"))]
#[case(" color : red ", Some("color:red;"))]
#[case("color:;:red;margin:0", Some("margin:0;"))]
#[case("color:;", None)]
#[case("", None)]
#[case("nonsense", None)]
fn test_style_decomposition(#[case] style: &str, #[case] expected: Option<&str>) {
    let mut attributes = Attributes::new();
    attributes.set("style", style);
    assert_eq!(attributes.get("style"), expected);
}

#[test]
fn test_empty_style_removes_attribute() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    assert!(html.set_attribute(div, "style", "color:red"));
    assert!(!html.set_attribute(div, "style", " ; "));
    assert!(!html.has_attribute(div, "style"));
}

#[test]
fn test_style_pairs() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    html.set_style(div, [("color", "red"), ("margin", ""), ("padding", "1px")], false);
    assert_eq!(html.attribute(div, "style"), Some("color:red;padding:1px;"));
    assert_eq!(
        html.style(div),
        vec![
            ("color".to_string(), "red".to_string()),
            ("padding".to_string(), "1px".to_string())
        ]
    );
    html.set_style(div, [("color", "blue"), ("border", "0")], false);
    assert_eq!(
        html.attribute(div, "style"),
        Some("color:red;padding:1px;border:0;")
    );
    html.set_style(div, [("color", "blue")], true);
    assert_eq!(
        html.attribute(div, "style"),
        Some("color:blue;padding:1px;border:0;")
    );
}

#[rstest]
#[case("ltr", Some("ltr"))]
#[case("RTL", Some("rtl"))]
#[case(" rtl ", None)]
#[case("auto", None)]
#[case("", None)]
fn test_dir(#[case] dir: &str, #[case] expected: Option<&str>) {
    let mut html = Html::new();
    let p = html.new_element("p").unwrap();
    assert_eq!(html.set_dir(p, dir), expected.is_some());
    assert_eq!(html.attribute(p, "dir"), expected);
}

#[test]
fn test_invalid_dir_keeps_previous_value() {
    let mut html = Html::new();
    let p = html.new_element("p").unwrap();
    html.set_dir(p, "rtl");
    html.set_dir(p, "sideways");
    assert_eq!(html.attribute(p, "dir"), Some("rtl"));
}

#[test]
fn test_reserved_setters() {
    let mut html = Html::new();
    let input = html.new_element("input").unwrap();
    html.set_id(input, "email");
    html.set_name(input, "email");
    html.set_title(input, "Your e-mail");
    html.set_tab_index(input, -1);
    html.set_class(input, "wide");
    assert_eq!(html.id(input), Some("email"));
    assert_eq!(html.class(input), Some("wide"));
    // the name attribute is not the element name
    assert_eq!(html.node_name(input), "input");
    assert_eq!(
        html.to_html(input, false, 0),
        r#"<input id="email" name="email" title="Your e-mail" tabindex="-1" class="wide">"#
    );
}

#[test]
fn test_apply_class() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    assert!(html.apply_class(div, "a", false));
    assert!(html.apply_class(div, " b ", false));
    assert!(html.apply_class(div, "a", false));
    assert_eq!(html.class(div), Some("a b"));
    assert!(html.apply_class(div, "c", true));
    assert_eq!(html.class(div), Some("c"));
    assert!(!html.apply_class(div, "  ", false));
}

#[test]
fn test_boolean_attribute_rendering() {
    let mut html = Html::new();
    let button = html.new_element("button").unwrap();
    html.set_attribute(button, "disabled", "");
    html.set_attribute(button, "type", "submit");
    assert_eq!(
        html.to_html(button, false, 0),
        r#"<button disabled type="submit"></button>"#
    );
}

#[test]
fn test_attributes_on_leaf_are_ignored() {
    let mut html = Html::new();
    let text = html.new_text("leaf");
    let comment = html.new_comment("leaf");
    for node in [text, comment] {
        assert!(!html.set_attribute(node, "id", "x"));
        assert!(!html.set_id(node, "x"));
        assert!(!html.apply_class(node, "x", false));
        assert!(!html.set_style(node, [("color", "red")], false));
        assert_eq!(html.attribute(node, "id"), None);
        assert!(!html.has_attribute(node, "id"));
        assert_eq!(html.remove_attribute(node, "id"), None);
        assert!(html.style(node).is_empty());
    }
    assert_eq!(html.to_html(text, false, 0), "leaf");
}

#[test]
fn test_attribute_value_escaping() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    html.set_attribute(div, "title", r#"say "hi" & <go>"#);
    assert_eq!(
        html.to_html(div, false, 0),
        r#"<div title="say &quot;hi&quot; & <go>"></div>"#
    );
}

#[rstest]
#[case("x<script>")]
#[case("a b")]
#[case("a=b")]
#[case("a\"b")]
#[case("a'b")]
#[case("a/b")]
#[case("a>")]
#[case("a\tb")]
fn test_malformed_name_is_rejected(#[case] name: &str) {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    assert!(!html.set_attribute(div, name, "1"));
    assert!(!html.has_attribute(div, name));
    assert_eq!(html.to_html(div, false, 0), "<div></div>");
}

#[rstest]
#[case("data-x")]
#[case("v-on:click")]
#[case("@click")]
#[case("aria-label")]
fn test_unusual_names_are_accepted(#[case] name: &str) {
    let mut attributes = Attributes::new();
    assert!(attributes.set(name, "1"));
    assert_eq!(attributes.get(name), Some("1"));
}
