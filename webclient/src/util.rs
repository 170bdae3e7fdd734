use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::*;

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

pub fn selector_must_parsed(sel: &'static str) -> Selector {
    Selector::parse(sel).expect("Failed to parse  `&'static str`  selector")
}

pub trait DocExt {
    fn select_first(&self, sel: &Selector) -> Result<ElementRef>;
}

impl DocExt for Html {
    fn select_first(&self, sel: &Selector) -> Result<ElementRef> {
        match self.select(sel).next() {
            Some(el) => Ok(el),
            None => Err(Error::NoSuchElementMatchesToSelector(sel.to_owned())),
        }
    }
}

impl<'a> DocExt for ElementRef<'a> {
    fn select_first(&self, sel: &Selector) -> Result<ElementRef> {
        match self.select(sel).next() {
            Some(el) => Ok(el),
            None => Err(Error::NoSuchElementMatchesToSelector(sel.to_owned())),
        }
    }
}

pub trait ElementRefExt {
    /// Text of the element with `<br>` and block-level boundaries rendered as newlines.
    fn multiline_text(&self) -> String;
}

impl<'a> ElementRefExt for ElementRef<'a> {
    fn multiline_text(&self) -> String {
        let mut buf = String::new();
        push_multiline_text(*self, &mut buf);
        buf
    }
}

fn push_multiline_text(el: ElementRef, buf: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.push_str(text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else {
            continue
        };
        match child_el.value().name() {
            "br" => buf.push('\n'),
            name => {
                push_multiline_text(child_el, buf);
                let is_block = matches!(name, "div" | "p");
                if is_block && !buf.is_empty() && !buf.ends_with('\n') {
                    buf.push('\n');
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pre_text(html: &str) -> String {
        let doc = Html::parse_fragment(html);
        let sel = selector_must_parsed("pre");
        doc.select_first(&sel).unwrap().multiline_text()
    }

    #[test]
    fn multiline_text_keeps_raw_newlines() {
        assert_eq!(pre_text("<pre>3\n1 2 3\n</pre>"), "3\n1 2 3\n");
    }

    #[test]
    fn multiline_text_renders_br_as_newline() {
        assert_eq!(pre_text("<pre>3<br>1 2 3<br/></pre>"), "3\n1 2 3\n");
    }

    #[test]
    fn multiline_text_renders_div_lines() {
        let html = r#"<pre><div class="test-example-line">3</div><div class="test-example-line">1 2 3</div></pre>"#;
        assert_eq!(pre_text(html), "3\n1 2 3\n");
    }

    #[test]
    fn multiline_text_of_empty_pre() {
        assert_eq!(pre_text("<pre></pre>"), "");
    }
}
