use htmlnode::output::code::{CodeOptions, Colors};
use htmlnode::output::MAX_INDENT_WIDTH;
use htmlnode::Html;
use insta::assert_snapshot;

fn plain() -> CodeOptions {
    CodeOptions {
        with_colors: false,
        ..Default::default()
    }
}

#[test]
fn test_plain_code_view() {
    let mut html = Html::new();
    let root = html
        .parse(r#"<div class="a" hidden><p>1 &amp; 2</p><br><!--x--></div>"#)
        .unwrap()
        .nodes()[0];
    assert_snapshot!(html.as_code(root, &plain()), @r###"
    <pre>&lt;div class=&quot;a&quot; hidden&gt;
        &lt;p&gt;
            1 &amp;amp; 2
        &lt;/p&gt;
        &lt;br&gt;
        &lt;!--x--&gt;
    &lt;/div&gt;
    </pre>
    "###);
}

#[test]
fn test_colored_code_view() {
    let mut html = Html::new();
    let root = html.parse(r#"<a href="/">home</a>"#).unwrap().nodes()[0];
    let options = CodeOptions {
        tab_spaces: 2,
        colors: Colors {
            bg_color: "black".to_string(),
            text_color: "white".to_string(),
            attribute_color: "green".to_string(),
            attribute_value_color: "purple".to_string(),
            node_name_color: "yellow".to_string(),
            lt_gt_color: "orange".to_string(),
            comment_color: "blue".to_string(),
            operator_color: "gray".to_string(),
        },
        ..Default::default()
    };
    let expected = concat!(
        r#"<pre style="margin:0;background-color:black;color:white">"#,
        r#"<span style="color:orange">&lt;</span><span style="color:yellow">a</span>"#,
        r#" <span style="color:green">href</span><span style="color:gray">=</span>"#,
        r#"<span style="color:purple">&quot;/&quot;</span>"#,
        r#"<span style="color:orange">&gt;</span>"#,
        "\n  home\n",
        r#"<span style="color:orange">&lt;/</span><span style="color:yellow">a</span>"#,
        r#"<span style="color:orange">&gt;</span>"#,
        "\n</pre>"
    );
    assert_eq!(html.as_code(root, &options), expected);
}

#[test]
fn test_default_colors() {
    let mut html = Html::new();
    let comment = html.new_comment("note");
    let code = html.as_code(comment, &CodeOptions::default());
    assert_eq!(
        code,
        concat!(
            r#"<pre style="margin:0;background-color:rgb(21, 18, 33);color:gray">"#,
            r#"<span style="color:rgb(0,165,245)">&lt;!--note--&gt;</span>"#,
            "\n</pre>"
        )
    );
}

#[test]
fn test_tab_spaces_are_clamped() {
    let mut html = Html::new();
    let root = html.parse("<b>x</b>").unwrap().nodes()[0];
    let wide = CodeOptions {
        tab_spaces: 20,
        ..plain()
    };
    assert_eq!(
        html.as_code(root, &wide),
        "<pre>&lt;b&gt;\n        x\n&lt;/b&gt;\n</pre>"
    );
    let none = CodeOptions {
        tab_spaces: -4,
        ..plain()
    };
    assert_eq!(
        html.as_code(root, &none),
        "<pre>&lt;b&gt;\nx\n&lt;/b&gt;\n</pre>"
    );
}

#[test]
fn test_initial_tab() {
    let mut html = Html::new();
    let root = html.parse("<b>x</b>").unwrap().nodes()[0];
    let options = CodeOptions {
        initial_tab: 1,
        ..plain()
    };
    assert_eq!(
        html.as_code(root, &options),
        "<pre>    &lt;b&gt;\n        x\n    &lt;/b&gt;\n</pre>"
    );
    let negative = CodeOptions {
        initial_tab: -2,
        ..plain()
    };
    assert_eq!(
        html.as_code(root, &negative),
        "<pre>&lt;b&gt;\n    x\n&lt;/b&gt;\n</pre>"
    );
}

#[test]
fn test_code_view_escapes_comment_delimiters() {
    let mut html = Html::new();
    let comment = html.new_comment("a --> b");
    assert_eq!(
        html.as_code(comment, &plain()),
        "<pre>&lt;!--a --  b--&gt;\n</pre>"
    );
}

#[test]
fn test_as_code_write() {
    let mut html = Html::new();
    let root = html.parse("<i>x</i>").unwrap().nodes()[0];
    let mut buf = Vec::new();
    html.as_code_write(root, &plain(), &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        html.as_code(root, &plain())
    );
}

#[test]
fn test_code_view_escapes_attribute_names() {
    let mut html = Html::new();
    let div = html.new_element("div").unwrap();
    html.set_attribute(div, "data-a&b", "1");
    assert_eq!(
        html.as_code(div, &plain()),
        "<pre>&lt;div data-a&amp;b=&quot;1&quot;&gt;\n&lt;/div&gt;\n</pre>"
    );
}

#[test]
fn test_huge_initial_tab_is_capped() {
    let mut html = Html::new();
    let root = html.parse("<b>x</b>").unwrap().nodes()[0];
    let options = CodeOptions {
        initial_tab: i64::MAX,
        ..plain()
    };
    let code = html.as_code(root, &options);
    let indent = " ".repeat(MAX_INDENT_WIDTH);
    assert!(code.starts_with(&format!("<pre>{}&lt;b&gt;\n", indent)));
    assert!(code.ends_with(&format!("\n{}&lt;/b&gt;\n</pre>", indent)));
}
