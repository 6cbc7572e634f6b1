//! Trial-expired page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use roomdesk_app::ports::RoomRepository;
use roomdesk_domain::trial::TrialNotice;

use super::DashboardError;
use crate::state::AppState;

/// Trial-expired page template.
#[derive(Template)]
#[template(path = "trial_expired.html")]
pub struct TrialExpiredTemplate {
    message: String,
    email: String,
    phone: String,
    tel_href: String,
    mailto_href: String,
}

impl From<&TrialNotice> for TrialExpiredTemplate {
    fn from(notice: &TrialNotice) -> Self {
        Self {
            message: notice.message.clone(),
            email: notice.email.clone(),
            phone: notice.phone.clone(),
            tel_href: notice.tel_href(),
            mailto_href: notice.mailto_href(),
        }
    }
}

/// Rendered page, ready to be sent.
pub struct TrialExpiredPage(String);

impl IntoResponse for TrialExpiredPage {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}

/// `GET /trial-expired`: tells the user their trial is over.
pub async fn expired<RR>(State(state): State<AppState<RR>>) -> Result<TrialExpiredPage, DashboardError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let html = TrialExpiredTemplate::from(state.trial_notice.as_ref()).render()?;
    Ok(TrialExpiredPage(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::test_support::{InMemoryRoomRepo, app_with, body_text, request, send};

    #[test]
    fn should_render_contact_details_and_mail_action() {
        let notice = TrialNotice {
            message: "Your trial is over".to_string(),
            email: "help@hotel.test".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            subject: "Upgrade please".to_string(),
        };

        let html = TrialExpiredTemplate::from(&notice).render().unwrap();

        assert!(html.contains("Your trial is over"));
        assert!(html.contains("help@hotel.test"));
        assert!(html.contains("+44 20 7946 0000"));
        assert!(html.contains(r#"href="mailto:help@hotel.test?subject=Upgrade%20please""#));
        assert!(html.contains(r#"href="tel:+442079460000""#));
    }

    #[test]
    fn should_escape_markup_in_message() {
        let notice = TrialNotice {
            message: "<script>alert(1)</script>".to_string(),
            ..TrialNotice::default()
        };

        let html = TrialExpiredTemplate::from(&notice).render().unwrap();

        assert!(!html.contains("<script"));
    }

    #[tokio::test]
    async fn should_serve_page_as_html() {
        let app = app_with(InMemoryRoomRepo::default());

        let resp = send(&app, request("GET", "/trial-expired", None)).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = body_text(resp).await;
        assert!(body.contains("Trial expired"));
        assert!(body.contains(&TrialNotice::default().mailto_href()));
    }
}
