//! HTML for the visualizer form.
//!
//! The page is plain server-rendered HTML with no scripts: submitting the form
//! posts it back to `/`, and the response is the same page with the inputs
//! retained and the two output areas filled in.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::{EXAMPLE_INPUT, Rendered};
use crate::types::SortOrder;

/// Number of visible rows in the step log area.
const LOG_ROWS: usize = 15;

/// Current values of the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub numbers: String,
    pub order: SortOrder,
    pub show_steps: bool,
}

impl Default for FormValues {
    fn default() -> Self {
        FormValues {
            numbers: String::new(),
            order: SortOrder::Ascending,
            show_steps: true,
        }
    }
}

/// Renders the full page.
///
/// `output` is `None` for a fresh form, in which case both output areas are
/// empty.
pub fn render_page(values: &FormValues, output: Option<&Rendered>) -> String {
    let (sorted_text, steps_text) = match output {
        Some(rendered) => (rendered.sorted_text.as_str(), rendered.steps_text.as_str()),
        None => ("", ""),
    };

    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Bubble Sort Interactive Visualizer</title>\n\
         <style>\n\
         body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }\n\
         label { display: block; margin-top: 1rem; font-weight: bold; }\n\
         input[type=text], textarea { width: 100%; box-sizing: border-box; font-family: monospace; }\n\
         fieldset { margin-top: 1rem; }\n\
         button { margin-top: 1rem; padding: 0.5rem 1rem; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Bubble Sort Interactive Visualizer</h1>\n\
         <p>Enter a list of numbers separated by commas, choose the sort order, \
         and see how the Bubble Sort algorithm works step by step.</p>\n",
    );
    let _ = writeln!(
        html,
        "<p><strong>Example:</strong> <code>{}</code></p>",
        encode_text(EXAMPLE_INPUT)
    );

    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str("<label for=\"numbers\">List of numbers (comma-separated)</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"numbers\" name=\"numbers\" placeholder=\"e.g. {}\" value=\"{}\">",
        encode_double_quoted_attribute(EXAMPLE_INPUT),
        encode_double_quoted_attribute(&values.numbers)
    );

    html.push_str("<fieldset>\n<legend>Sort order</legend>\n");
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let _ = writeln!(
            html,
            "<label><input type=\"radio\" name=\"order\" value=\"{order}\"{}> {order}</label>",
            checked(values.order == order)
        );
    }
    html.push_str("</fieldset>\n");

    let _ = writeln!(
        html,
        "<label><input type=\"checkbox\" name=\"show_steps\"{}> Show step-by-step</label>",
        checked(values.show_steps)
    );
    html.push_str("<button type=\"submit\">Run Bubble Sort</button>\n</form>\n");

    html.push_str("<label for=\"sorted\">Sorted Result</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"sorted\" readonly value=\"{}\">",
        encode_double_quoted_attribute(sorted_text)
    );

    html.push_str("<label for=\"steps\">Step-by-step log</label>\n");
    let _ = writeln!(
        html,
        "<textarea id=\"steps\" rows=\"{LOG_ROWS}\" readonly>{}</textarea>",
        encode_text(steps_text)
    );

    html.push_str("</body>\n</html>\n");
    html
}

fn checked(on: bool) -> &'static str {
    if on { " checked" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn submitted_markup_is_escaped() {
        let values = FormValues {
            numbers: r#"<script>"x"</script>"#.to_string(),
            ..FormValues::default()
        };
        let rendered = Rendered {
            sorted_text: String::new(),
            steps_text: "Error: '<script>' is not a valid number.".to_string(),
        };
        let html = render_page(&values, Some(&rendered));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"value="&lt;script&gt;&quot;x&quot;&lt;/script&gt;""#));
        assert!(html.contains("Error: '&lt;script&gt;' is not a valid number.</textarea>"));
    }

    #[test]
    fn fresh_page_has_defaults() {
        let html = render_page(&FormValues::default(), None);
        assert!(html.contains(r#"value="Ascending" checked"#));
        assert!(!html.contains(r#"value="Descending" checked"#));
        assert!(html.contains(r#"name="show_steps" checked"#));
        assert!(html.contains(r#"<textarea id="steps" rows="15" readonly></textarea>"#));
    }

    #[test]
    fn outputs_are_rendered() {
        let values = FormValues {
            numbers: "2, 1".to_string(),
            order: SortOrder::Descending,
            show_steps: false,
        };
        let rendered = Rendered {
            sorted_text: "2.0, 1.0".to_string(),
            steps_text: "line one\nline two".to_string(),
        };
        let html = render_page(&values, Some(&rendered));
        assert!(html.contains(r#"id="sorted" readonly value="2.0, 1.0""#));
        assert!(html.contains("line one\nline two</textarea>"));
        assert!(html.contains(r#"value="Descending" checked"#));
        assert!(!html.contains(r#"name="show_steps" checked"#));
    }

    proptest! {
        /// Submitted text never adds a tag to the page.
        #[test]
        fn user_text_cannot_inject_markup(text: String) {
            let values = FormValues {
                numbers: text.clone(),
                ..FormValues::default()
            };
            let rendered = Rendered {
                sorted_text: text.clone(),
                steps_text: text,
            };
            let html = render_page(&values, Some(&rendered));
            let fresh = render_page(&FormValues::default(), None);
            prop_assert_eq!(html.matches('<').count(), fresh.matches('<').count());
        }
    }
}
