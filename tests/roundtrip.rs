use htmlnode::Html;
use rstest::rstest;

#[rstest]
#[case(r#"<div class="a"><p>Hi</p></div>"#)]
#[case("<ul><li>1</li><li>2</li></ul>")]
#[case(r#"<p>a <b>b</b> <i title="x y">c</i></p>"#)]
#[case(r#"<form><input type="text" name="q" required><button disabled>Go</button></form>"#)]
#[case("<div><!-- note --><br><hr><img src=\"a.png\"></div>")]
#[case("<p>Tom &amp; Jerry &lt;3</p>")]
#[case("<pre>\n  keep\n    spacing\n</pre>")]
#[case(r#"<v-row><v-col cols="6">x</v-col></v-row>"#)]
fn roundtrip(#[case] text: &str) {
    let mut html = Html::new();
    let fragment = html.parse(text).unwrap();
    assert_eq!(html.fragment_to_html(&fragment, false), text);
}

#[test]
fn roundtrip_document() {
    let mut html = Html::new();
    let text = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>T</title></head><body><p>x</p></body></html>";
    let fragment = html.parse(text).unwrap();
    assert_eq!(fragment.nodes().len(), 2);
    assert_eq!(html.fragment_to_html(&fragment, false), text);
}

#[test]
fn roundtrip_is_idempotent_after_normalization() {
    let mut html = Html::new();
    let text = "<DIV Class=a STYLE='color: red'><P>unclosed<br/></DIV>";
    let first = html.parse(text).unwrap();
    let once = html.fragment_to_html(&first, false);
    assert_eq!(
        once,
        r#"<div class="a" style="color:red;"><p>unclosed<br></p></div>"#
    );
    let second = html.parse(&once).unwrap();
    assert_eq!(html.fragment_to_html(&second, false), once);
}

#[test]
fn roundtrip_formatted_output_parses_back() {
    let mut html = Html::new();
    let root = html
        .parse("<ul><li>a</li><li>b</li></ul>")
        .unwrap()
        .nodes()[0];
    let formatted = html.to_html(root, true, 0);
    let reparsed = html.parse(&formatted).unwrap().single().unwrap();
    let items = html.find_all_by_tag_name(reparsed, "li");
    assert_eq!(items.len(), 2);
    assert_eq!(html.text_content(items[1]).trim(), "b");
    // whitespace text from the indentation is kept
    assert_eq!(html.to_html(reparsed, false, 0), formatted.trim());
}
