use super::*;

#[test]
fn render_markdown_html_renders_emphasis_and_lists() {
    let out = render_markdown_html("**Policy Writing** helps\n\n- one\n- two");
    assert!(out.contains("<strong>Policy Writing</strong>"));
    assert!(out.contains("<li>one</li>"));
}

#[test]
fn render_markdown_html_drops_raw_html() {
    let out = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
    assert!(out.contains("world"));
}

#[test]
fn render_markdown_html_drops_inline_html_but_keeps_text() {
    let out = render_markdown_html("a <b>bold</b> claim");
    assert!(!out.contains("<b>"));
    assert!(out.contains("claim"));
}
