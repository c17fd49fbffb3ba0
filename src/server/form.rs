//! Form page handlers.
//!
//! Rejected submissions are never turned into HTTP errors here: the error
//! text, with a usage example, is shown in the step log area instead.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Html;
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use super::page::{FormValues, render_page};
use crate::engine::bubble_sort;
use crate::render::{format_error, format_outcome};
use crate::types::{SortOrder, UnknownSortOrder};

/// Fields posted by the form.
///
/// An unchecked checkbox is omitted from the submission entirely, so
/// `show_steps` is present (as `"on"`) only when it was ticked. `order` is
/// kept as text so an unknown value can be reported in the log area.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub numbers: String,

    #[serde(default)]
    pub order: Option<String>,

    #[serde(default)]
    pub show_steps: Option<String>,
}

impl FormSubmission {
    /// Splits the submission into control values and an order error, if any.
    ///
    /// An unrecognized order leaves the radio on its default.
    fn into_values(self) -> (FormValues, Option<UnknownSortOrder>) {
        let (order, order_error) = match self.order.as_deref().map(str::parse::<SortOrder>) {
            None => (SortOrder::default(), None),
            Some(Ok(order)) => (order, None),
            Some(Err(err)) => (SortOrder::default(), Some(err)),
        };

        let values = FormValues {
            numbers: self.numbers,
            order,
            show_steps: self.show_steps.is_some(),
        };
        (values, order_error)
    }
}

/// Serves the empty form.
pub async fn form_handler() -> Html<String> {
    Html(render_page(&FormValues::default(), None))
}

/// Handles a form submission and re-renders the page with the results.
pub async fn submit_handler(
    State(app_state): State<AppState>,
    submission: Result<Form<FormSubmission>, FormRejection>,
) -> Html<String> {
    let Form(submission) = match submission {
        Ok(form) => form,
        Err(rejection) => {
            info!(error = %rejection, "Unreadable form submission");
            let rendered = format_error(rejection.body_text());
            return Html(render_page(&FormValues::default(), Some(&rendered)));
        }
    };

    let (values, order_error) = submission.into_values();
    if let Some(err) = order_error {
        info!(error = %err, "Rejected form submission");
        return Html(render_page(&values, Some(&format_error(err))));
    }

    let rendered = match app_state.parse_submission(&values.numbers) {
        Ok(numbers) => {
            debug!(
                count = numbers.len(),
                order = %values.order,
                show_steps = values.show_steps,
                "Form submission"
            );
            let outcome = bubble_sort(&numbers, values.order, values.show_steps);
            format_outcome(&outcome, values.show_steps)
        }
        Err(err) => {
            info!(error = %err, "Rejected form submission");
            format_error(err)
        }
    };

    Html(render_page(&values, Some(&rendered)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(numbers: &str, order: Option<&str>) -> FormSubmission {
        FormSubmission {
            numbers: numbers.to_string(),
            order: order.map(str::to_string),
            show_steps: Some("on".to_string()),
        }
    }

    #[test]
    fn checkbox_presence_maps_to_show_steps() {
        let (ticked, _) = submission("1", None).into_values();
        assert!(ticked.show_steps);
        let (unticked, _) = FormSubmission::default().into_values();
        assert!(!unticked.show_steps);
    }

    #[test]
    fn order_is_case_insensitive() {
        let (values, err) = submission("1", Some("descending")).into_values();
        assert_eq!(values.order, SortOrder::Descending);
        assert!(err.is_none());
    }

    #[test]
    fn unknown_order_falls_back_to_default() {
        let (values, err) = submission("1", Some("sideways")).into_values();
        assert_eq!(values.order, SortOrder::Ascending);
        assert_eq!(err, Some(UnknownSortOrder("sideways".to_string())));
    }

    #[tokio::test]
    async fn unknown_order_is_reported_in_log() {
        let Html(html) = submit_handler(
            State(AppState::default()),
            Ok(Form(submission("2, 1", Some("sideways")))),
        )
        .await;
        assert!(html.contains("Error: unknown sort order"));
        assert!(html.contains(r#"value="2, 1""#));
    }

    #[tokio::test]
    async fn fresh_form_is_empty() {
        let Html(html) = form_handler().await;
        assert!(html.contains(r#"id="sorted" readonly value="""#));
    }

    #[tokio::test]
    async fn too_many_numbers_is_reported_in_log() {
        let Html(html) = submit_handler(
            State(AppState::new(2)),
            Ok(Form(submission("3, 2, 1", Some("Ascending")))),
        )
        .await;
        assert!(html.contains("Error: Too many numbers (3). At most 2 can be sorted at once."));
    }
}
