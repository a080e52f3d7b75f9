// src/core/html.rs
//
// Small DOM helpers over `scraper`. Everything walks children/descendants
// directly so no selector has to be compiled for one-tag lookups.

use scraper::{ElementRef, Node};

use super::sanitize::normalize_ws;

/// Tags that start a new line when they appear inside a text block.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "blockquote", "table", "tr",
    "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Element children of `el`, in document order.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// First descendant (excluding `el`) with the given tag name.
pub fn find_tag<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == tag)
}

/// Number of descendants (excluding `el`) with the given tag name.
pub fn count_tag(el: ElementRef<'_>, tag: &str) -> usize {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == tag)
        .count()
}

/// Direct `td`/`th` children of a row.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(row)
        .filter(|e| matches!(e.value().name(), "td" | "th"))
        .collect()
}

/// Direct `td` children only; header rows have none.
pub fn data_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(row)
        .filter(|e| e.value().name() == "td")
        .collect()
}

/// Visible text of `el`, whitespace-normalized. A `br` reads as a space.
pub fn text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(el, None, &mut raw);
    normalize_ws(&raw)
}

/// Like `text`, leaving out every `skip` subtree ("80,000" beside a link).
pub fn text_outside(el: ElementRef<'_>, skip: &str) -> String {
    let mut raw = String::new();
    push_text(el, Some(skip), &mut raw);
    normalize_ws(&raw)
}

fn push_text(el: ElementRef<'_>, skip: Option<&str>, out: &mut String) {
    for node in el.children() {
        match node.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name() == "br" => out.push(' '),
            Node::Element(e) if skip == Some(e.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(node) {
                    push_text(child, skip, out);
                }
            }
            _ => {}
        }
    }
}

/// Like `text`, but `None` when nothing is left.
pub fn non_empty_text(el: ElementRef<'_>) -> Option<String> {
    Some(text(el)).filter(|t| !t.is_empty())
}

/// A row flattened into its non-empty cell texts.
pub fn row_tokens(row: ElementRef<'_>) -> Vec<String> {
    cells(row)
        .into_iter()
        .map(text)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Lines of a text block. Block-level children and `br` end a line;
/// bare text and inline elements (links, bold) stay in the running line.
pub fn child_lines(el: ElementRef<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut run = String::new();
    for node in el.children() {
        match node.value() {
            Node::Text(t) => run.push_str(t),
            Node::Element(e) if e.name() == "br" => end_line(&mut run, &mut lines),
            Node::Element(e) => {
                let Some(child) = ElementRef::wrap(node) else { continue };
                if BLOCK_TAGS.contains(&e.name()) {
                    end_line(&mut run, &mut lines);
                    lines.extend(child_lines(child));
                } else {
                    push_text(child, None, &mut run);
                }
            }
            _ => {}
        }
    }
    end_line(&mut run, &mut lines);
    lines
}

fn end_line(run: &mut String, lines: &mut Vec<String>) {
    let line = normalize_ws(run);
    if !line.is_empty() {
        lines.push(line);
    }
    run.clear();
}

fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Image source of `el` itself when it is an `img`, else of its first `img`.
/// Lazy-loaded images keep the real URL in `data-src`.
pub fn img_src(el: ElementRef<'_>) -> Option<String> {
    let img = if el.value().name() == "img" { Some(el) } else { find_tag(el, "img") }?;
    attr(img, "src").or_else(|| attr(img, "data-src"))
}

/// `alt` of the first image under `el`.
pub fn img_alt(el: ElementRef<'_>) -> Option<String> {
    let img = if el.value().name() == "img" { Some(el) } else { find_tag(el, "img") }?;
    attr(img, "alt")
}

/// `el` itself when it is a link, else its first `a` descendant.
pub fn link<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    if el.value().name() == "a" { Some(el) } else { find_tag(el, "a") }
}

pub fn link_title(el: ElementRef<'_>) -> Option<String> {
    link(el).and_then(|a| attr(a, "title"))
}

pub fn link_href(el: ElementRef<'_>) -> Option<String> {
    link(el).and_then(|a| attr(a, "href"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        doc.select(&Selector::parse(css).unwrap()).next().unwrap()
    }

    #[test]
    fn tokens_skip_empty_cells() {
        let doc = Html::parse_document(
            "<table><tr><td> 2 </td><td></td><td>Deals <b>big</b>\n damage</td></tr></table>",
        );
        let row = first(&doc, "tr");
        assert_eq!(row_tokens(row), vec!["2", "Deals big damage"]);
        assert_eq!(cells(row).len(), 3);
    }

    #[test]
    fn header_rows_have_no_data_cells() {
        let doc = Html::parse_document("<table><tr><th>Lv</th><th>Cost</th></tr></table>");
        let row = first(&doc, "tr");
        assert!(data_cells(row).is_empty());
        assert_eq!(cells(row).len(), 2);
    }

    #[test]
    fn image_source_prefers_src_then_data_src() {
        let doc = Html::parse_document(
            r#"<div id="a"><img src="/a.png"></div><div id="b"><img data-src="/b.png"></div>"#,
        );
        assert_eq!(img_src(first(&doc, "#a")).as_deref(), Some("/a.png"));
        assert_eq!(img_src(first(&doc, "#b")).as_deref(), Some("/b.png"));
        assert_eq!(img_src(first(&doc, "#b img")).as_deref(), Some("/b.png"));
    }

    #[test]
    fn link_attributes() {
        let doc = Html::parse_document(
            r#"<td id="c"><span><a href="/wiki/Alice" title="Strong">S</a></span></td>"#,
        );
        let cell = first(&doc, "span");
        assert_eq!(link_title(cell).as_deref(), Some("Strong"));
        assert_eq!(link_href(cell).as_deref(), Some("/wiki/Alice"));
    }

    #[test]
    fn br_separates_words() {
        let doc = Html::parse_document("<table><tr><td id=\"h\">Reading<br>Stargazing</td></tr></table>");
        let cell = first(&doc, "#h");
        assert_eq!(text(cell), "Reading Stargazing");
        assert_eq!(child_lines(cell), vec!["Reading", "Stargazing"]);
    }

    #[test]
    fn inline_links_stay_in_their_line() {
        let doc = Html::parse_document(
            r#"<div id="bg">Alice attends <a href="/wiki/Trinity">Trinity</a> and loves cake.<p>Second <b>line</b>.</p></div>"#,
        );
        assert_eq!(
            child_lines(first(&doc, "#bg")),
            vec!["Alice attends Trinity and loves cake.", "Second line."]
        );
    }

    #[test]
    fn text_outside_skips_link_text() {
        let doc = Html::parse_document(
            r#"<table><tr><td id="m"><a title="Lv.2 Note">Tier 2 Note</a> x5</td></tr></table>"#,
        );
        assert_eq!(text_outside(first(&doc, "#m"), "a"), "x5");
    }

    #[test]
    fn child_lines_split_paragraphs() {
        let doc = Html::parse_document(
            r#"<div id="p"><p>One.</p><p> Two. </p></div><div id="q">Just text</div>"#,
        );
        assert_eq!(child_lines(first(&doc, "#p")), vec!["One.", "Two."]);
        assert_eq!(child_lines(first(&doc, "#q")), vec!["Just text"]);
    }
}
