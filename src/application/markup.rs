// Markup structure helpers
//
// The translation prompt asks the model to keep every tag and attribute as-is.
// These helpers pull the tag sequence out of a document so the result can be
// checked against the input.

/// Every `<...>` run in `text`, in document order, byte-for-byte.
pub fn tag_skeleton(text: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut start = None;

    for (idx, c) in text.char_indices() {
        match c {
            '<' => start = Some(idx),
            '>' => {
                if let Some(s) = start.take() {
                    tags.push(&text[s..=idx]);
                }
            }
            _ => {}
        }
    }

    tags
}

/// Text between tags, whitespace-only runs dropped.
pub fn text_nodes(text: &str) -> Vec<&str> {
    let mut nodes = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(open) => {
                push_node(&mut nodes, &rest[..open]);
                match rest[open..].find('>') {
                    Some(close) => rest = &rest[open + close + 1..],
                    None => {
                        push_node(&mut nodes, &rest[open..]);
                        break;
                    }
                }
            }
            None => {
                push_node(&mut nodes, rest);
                break;
            }
        }
    }

    nodes
}

fn push_node<'a>(nodes: &mut Vec<&'a str>, node: &'a str) {
    if !node.trim().is_empty() {
        nodes.push(node);
    }
}

/// True when both documents carry the same tags in the same order.
pub fn same_structure(source: &str, translated: &str) -> bool {
    tag_skeleton(source) == tag_skeleton(translated)
}
