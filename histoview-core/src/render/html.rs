use crate::render::Element;

const PAGE_STYLE: &str = "\
.histogram{position:relative;margin:1em 0 3em 0;padding-bottom:2em}\n\
.histogram-graph,.histogram-annotations,.histogram-labels{position:relative;width:100%}\n\
.histogram-graph{height:120px}\n\
.histogram-annotations{height:8px}\n\
.histogram-labels{height:1.2em}\n\
.histogram-bucket{position:absolute;bottom:0;background:#4a8aff}\n\
.histogram-percentile,.histogram-interval{position:absolute;top:0;width:1px;height:8px}\n\
.histogram-percentile{background:#c9a84c}\n\
.histogram-interval{background:#9b59b6}\n\
.histogram-label{position:absolute;font-size:10px}\n\
.histogram-popup{position:absolute;right:0;top:0;background:#fff;border:1px solid #888;padding:4px}\n";

/// Serialize one element tree.
pub fn to_html(element: &Element) -> String {
    let mut out = String::with_capacity(1024);
    write_element(element, &mut out);
    out
}

/// A standalone document holding every rendered histogram.
pub fn render_page(title: &str, histograms: &[&Element]) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");

    html.push_str("<title>");
    html.push_str(&escape_html(title));
    html.push_str("</title>\n");

    html.push_str("<style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n");

    html.push_str("</head>\n<body>\n");

    for element in histograms {
        write_element(element, &mut html);
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    out.push_str(" class=\"");
    out.push_str(element.class);
    out.push('"');

    if !element.style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape_html(&element.style.to_css()));
        out.push('"');
    }
    out.push('>');

    if let Some(text) = &element.text {
        out.push_str(&escape_html(text));
    }
    for child in &element.children {
        write_element(child, out);
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

/// Minimal HTML escaping (sufficient for stat names and labels)
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
