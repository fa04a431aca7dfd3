//! Product overview assembly from a documentation landing page.
//!
//! Used when the caller asked about the whole SDK rather than one function:
//! the landing page's title, introduction, "Why use" section and installation
//! snippet are stitched into one document.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use docrouter_shared::{DocRouterError, Result};

use crate::walk::{element_text, fenced, push_list};

static H1_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("valid selector"));

static INTRO_P_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section#intro p").expect("valid selector"));

static FLOW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, p, ul, pre").expect("valid selector"));

/// Assemble an overview document from a landing page.
///
/// Fails when none of the four parts could be found.
#[instrument(skip(html), fields(html_len = html.len()))]
pub fn extract_overview(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let flow: Vec<ElementRef<'_>> = doc.select(&FLOW_SEL).collect();
    let mut content = String::new();

    if let Some(title) = doc.select(&H1_SEL).next() {
        content.push_str(&format!("# {}\n\n", element_text(title)));
    }

    for p in doc.select(&INTRO_P_SEL) {
        content.push_str(&element_text(p));
        content.push_str("\n\n");
    }

    if let Some(idx) = find_h2(&flow, "Why use") {
        content.push_str(&format!("## {}\n\n", element_text(flow[idx])));
        push_why_use(&mut content, &flow[idx + 1..]);
    }

    if let Some(idx) = find_h2(&flow, "Installation") {
        content.push_str(&format!("## {}\n\n", element_text(flow[idx])));
        let next = flow[idx + 1..]
            .iter()
            .find(|el| matches!(el.value().name(), "p" | "pre"));
        if let Some(pre) = next.filter(|el| el.value().name() == "pre") {
            content.push_str(&fenced(&element_text(*pre), "bash"));
        }
    }

    if content.is_empty() {
        return Err(DocRouterError::extraction("landing page has no overview content"));
    }

    debug!(len = content.len(), "overview assembled");
    Ok(content)
}

/// Index of the first `h2` whose text contains `needle`.
fn find_h2(flow: &[ElementRef<'_>], needle: &str) -> Option<usize> {
    flow.iter()
        .position(|el| el.value().name() == "h2" && el.text().collect::<String>().contains(needle))
}

/// Emit the paragraphs and lists following a "Why use" heading.
///
/// The first paragraph or list is taken even past intervening headings; after
/// that the section ends at the next `h2`.
fn push_why_use(content: &mut String, rest: &[ElementRef<'_>]) {
    let mut started = false;
    let mut last_list: Option<ElementRef<'_>> = None;

    for el in rest {
        let name = el.value().name();
        if name == "pre" {
            continue;
        }
        if name == "h2" {
            if started {
                break;
            }
            continue;
        }
        if last_list.is_some_and(|list| is_inside(*el, list)) {
            continue;
        }

        started = true;
        match name {
            "p" => {
                content.push_str(&element_text(*el));
                content.push_str("\n\n");
            }
            "ul" => {
                push_list(content, *el);
                last_list = Some(*el);
            }
            _ => {}
        }
    }
}

fn is_inside(el: ElementRef<'_>, container: ElementRef<'_>) -> bool {
    el.ancestors().any(|a| a.id() == container.id())
}
