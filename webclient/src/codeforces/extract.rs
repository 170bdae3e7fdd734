use scraper::{ElementRef, Html};

use crate::{
    error::*,
    model::SampleCase,
    util::{self, DocExt as _, ElementRefExt as _},
};

/// Selector contract of a Codeforces problem statement:
/// the first `.sample-test` container holds `.input` and `.output` blocks,
/// each carrying its text in the first `pre` descendant.
pub const SEL_SAMPLE_CONTAINER: &str = ".sample-test";
pub const SEL_INPUT_BLOCK: &str = ".input";
pub const SEL_OUTPUT_BLOCK: &str = ".output";
pub const SEL_BLOCK_TEXT: &str = "pre";

fn extract_block_text(block: ElementRef) -> Result<String> {
    let sel_pre = util::selector_must_parsed(SEL_BLOCK_TEXT);
    let pre = block.select_first(&sel_pre)?;

    // `<pre></pre>` gives an empty case
    let mut s = pre.multiline_text().replace("\r\n", "\n");
    if !s.is_empty() && !s.ends_with('\n') {
        s.push('\n');
    }
    Ok(s)
}

/// Extracts sample cases in document order, pairing the i-th input block with the i-th output block.
pub fn extract_samples(raw_html: &str) -> Result<Vec<SampleCase>> {
    let doc = Html::parse_document(raw_html);
    scrape_samples(&doc)
}

pub fn scrape_samples(doc: &Html) -> Result<Vec<SampleCase>> {
    let sel_container = util::selector_must_parsed(SEL_SAMPLE_CONTAINER);
    let sel_input = util::selector_must_parsed(SEL_INPUT_BLOCK);
    let sel_output = util::selector_must_parsed(SEL_OUTPUT_BLOCK);

    let container = doc.select_first(&sel_container)?;

    let inputs = container
        .select(&sel_input)
        .map(extract_block_text)
        .collect::<Result<Vec<_>>>()?;
    let outputs = container
        .select(&sel_output)
        .map(extract_block_text)
        .collect::<Result<Vec<_>>>()?;

    if inputs.len() != outputs.len() {
        return Err(Error::SampleCountMismatch {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    let cases = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| SampleCase { input, output })
        .collect();
    Ok(cases)
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_test_html(blocks: &str) -> String {
        format!(
            r#"<html><body><div class="problem-statement"><div class="sample-tests"><div class="section-title">Examples</div><div class="sample-test">{}</div></div></div></body></html>"#,
            blocks
        )
    }

    #[test]
    fn extract_single_sample() {
        let html = sample_test_html(
            r#"<div class="input"><div class="title">Input</div><pre>4
1 2 3 4
</pre></div><div class="output"><div class="title">Output</div><pre>10
</pre></div>"#,
        );
        let cases = extract_samples(&html).unwrap();
        assert_eq!(cases, vec![SampleCase::new("4\n1 2 3 4\n", "10\n")]);
    }

    #[test]
    fn extract_keeps_document_order() {
        let html = sample_test_html(
            r#"<div class="input"><pre>1</pre></div><div class="output"><pre>one</pre></div>
               <div class="input"><pre>2</pre></div><div class="output"><pre>two</pre></div>
               <div class="input"><pre>3</pre></div><div class="output"><pre>three</pre></div>"#,
        );
        let cases = extract_samples(&html).unwrap();
        assert_eq!(
            cases,
            vec![
                SampleCase::new("1\n", "one\n"),
                SampleCase::new("2\n", "two\n"),
                SampleCase::new("3\n", "three\n"),
            ]
        );
    }

    #[test]
    fn extract_pairs_by_position_not_adjacency() {
        let html = sample_test_html(
            r#"<div class="input"><pre>a</pre></div><div class="input"><pre>b</pre></div>
               <div class="output"><pre>A</pre></div><div class="output"><pre>B</pre></div>"#,
        );
        let cases = extract_samples(&html).unwrap();
        assert_eq!(
            cases,
            vec![SampleCase::new("a\n", "A\n"), SampleCase::new("b\n", "B\n")]
        );
    }

    #[test]
    fn extract_from_line_divs() {
        let html = sample_test_html(
            r#"<div class="input"><pre><div class="test-example-line test-example-line-even test-example-line-0">2</div><div class="test-example-line test-example-line-even test-example-line-0">1 1</div></pre></div><div class="output"><pre>2<br/></pre></div>"#,
        );
        let cases = extract_samples(&html).unwrap();
        assert_eq!(cases, vec![SampleCase::new("2\n1 1\n", "2\n")]);
    }

    #[test]
    fn extract_empty_container_gives_no_samples() {
        let html = sample_test_html("");
        assert_eq!(extract_samples(&html).unwrap(), vec![]);
    }

    #[test]
    fn extract_fails_without_container() {
        let html = "<html><body><pre>1</pre></body></html>";
        let err = extract_samples(html).unwrap_err();
        assert!(matches!(err, Error::NoSuchElementMatchesToSelector(_)));
    }

    #[test]
    fn extract_fails_on_count_mismatch() {
        let html = sample_test_html(
            r#"<div class="input"><pre>1</pre></div><div class="output"><pre>1</pre></div>
               <div class="input"><pre>2</pre></div>"#,
        );
        let err = extract_samples(&html).unwrap_err();
        assert!(matches!(
            err,
            Error::SampleCountMismatch {
                inputs: 2,
                outputs: 1
            }
        ));
    }

    #[test]
    fn extract_fails_when_block_has_no_pre() {
        let html = sample_test_html(
            r#"<div class="input"><div class="title">Input</div></div><div class="output"><pre>1</pre></div>"#,
        );
        let err = extract_samples(&html).unwrap_err();
        assert!(matches!(err, Error::NoSuchElementMatchesToSelector(_)));
    }
}
