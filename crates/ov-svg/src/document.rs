pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

pub const DOCUMENT_CLOSE: &str = "</svg>";

/// Opening `<svg>` tag whose viewBox maps one user unit to one pixel.
pub fn document_open(width: usize, height: usize) -> String {
    format!(
        r#"<svg xmlns="{SVG_NAMESPACE}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
}

/// Concatenates `fragments` between the opening and closing tags, in order.
pub fn write_document(width: usize, height: usize, fragments: &[String]) -> String {
    let open = document_open(width, height);
    let body: usize = fragments.iter().map(String::len).sum();

    let mut doc = String::with_capacity(open.len() + body + DOCUMENT_CLOSE.len());
    doc.push_str(&open);
    for fragment in fragments {
        doc.push_str(fragment);
    }
    doc.push_str(DOCUMENT_CLOSE);
    doc
}
