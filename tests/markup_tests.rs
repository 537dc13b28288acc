//! 标记结构测试

use smart_translate::application::markup::{same_structure, tag_skeleton, text_nodes};

#[test]
fn test_skeleton_keeps_attributes() {
    let html = r#"<p class="lead">Hi <a href="/x">there</a></p>"#;
    assert_eq!(
        tag_skeleton(html),
        vec![r#"<p class="lead">"#, r#"<a href="/x">"#, "</a>", "</p>"]
    );
}

#[test]
fn test_plain_text_has_no_tags() {
    assert!(tag_skeleton("Bonjour le monde").is_empty());
    assert_eq!(text_nodes("Bonjour le monde"), vec!["Bonjour le monde"]);
}

#[test]
fn test_text_nodes_between_tags() {
    assert_eq!(
        text_nodes("<h1>Hello</h1>\n<p>World</p>"),
        vec!["Hello", "World"]
    );
}

#[test]
fn test_structure_comparison() {
    assert!(same_structure("<h1>Hello</h1>", "<h1>Hola</h1>"));
    // 标签变了就不是同一结构
    assert!(!same_structure("<h1>Hello</h1>", "<h2>Hola</h2>"));
}
