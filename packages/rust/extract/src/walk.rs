//! Document-order walk of a content region.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

static BLOCK_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, p, pre, code, ul, ol").expect("valid selector")
});

static LIST_ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));

/// Render the recognised block elements of `region` as Markdown-like text.
///
/// Every heading level becomes `##` so sections can be split on one marker.
pub(crate) fn render_region(region: ElementRef<'_>, code_language: &str) -> String {
    let mut out = String::new();

    for el in region.select(&BLOCK_SEL) {
        let name = el.value().name();
        if is_covered(el, region, name) {
            continue;
        }

        match name {
            "h1" | "h2" | "h3" => {
                let heading = element_text(el);
                if !heading.is_empty() {
                    out.push_str(&format!("\n## {heading}\n\n"));
                }
            }
            "p" => {
                out.push_str(&element_text(el));
                out.push_str("\n\n");
            }
            "pre" | "code" => {
                let code = element_text(el);
                if !code.is_empty() {
                    out.push_str(&fenced(&code, code_language));
                }
            }
            "ul" | "ol" => {
                push_list(&mut out, el);
            }
            _ => {}
        }
    }

    out
}

/// Append one bullet per `<li>` followed by a blank line.
pub(crate) fn push_list(out: &mut String, list: ElementRef<'_>) {
    for li in list.select(&LIST_ITEM_SEL) {
        out.push_str(&format!("- {}\n", element_text(li)));
    }
    out.push('\n');
}

/// Format a fenced code block.
pub(crate) fn fenced(code: &str, language: &str) -> String {
    format!("```{language}\n{code}\n```\n\n")
}

/// Trimmed text content of an element.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Whether an ancestor (below `region`) already emits this element's text.
///
/// Lists and preformatted blocks emit their whole subtree; `code` inside a
/// paragraph, heading or list item is inline and stays part of that text.
fn is_covered(el: ElementRef<'_>, region: ElementRef<'_>, name: &str) -> bool {
    for ancestor in el.ancestors() {
        if ancestor.id() == region.id() {
            break;
        }
        let Some(ancestor) = ElementRef::wrap(ancestor) else {
            continue;
        };
        match ancestor.value().name() {
            "pre" | "ul" | "ol" => return true,
            "p" | "h1" | "h2" | "h3" | "li" if name == "code" => return true,
            _ => {}
        }
    }
    false
}
