use super::*;

fn comments(texts: &[&str]) -> Vec<Comment> {
    texts.iter().map(|t| Comment::new(*t)).collect()
}

#[test]
fn lines_are_one_indexed_in_order() {
    let panel = RenderedPanel::from_comments(&comments(&["a", "b"]));
    assert_eq!(panel.lines(), ["Comment 1 is a", "Comment 2 is b"]);
    assert_eq!(panel.len(), 2);
}

#[test]
fn empty_comments_render_empty_panel() {
    let panel = RenderedPanel::from_comments(&[]);
    assert!(panel.is_empty());
    assert_eq!(panel.to_html(), "");
}

#[test]
fn html_wraps_each_line_in_paragraph() {
    let panel = RenderedPanel::from_comments(&comments(&["hi", "there"]));
    assert_eq!(panel.to_html(), "<p>Comment 1 is hi</p><p>Comment 2 is there</p>");
}

#[test]
fn html_escapes_comment_markup() {
    let panel = RenderedPanel::from_comments(&comments(&["<script>alert('x')</script>"]));
    assert_eq!(
        panel.to_html(),
        "<p>Comment 1 is &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
    );
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Bonjour le monde!"), "Bonjour le monde!");
    assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
}
