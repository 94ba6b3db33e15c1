use axum::extract::{Form, State};
use tracing::info;

use crate::errors::AppError;
use crate::routes::nav::Nav;
use crate::site::contact::{ContactForm, ContactSession};
use crate::site::pages::{render_contact, Rendered};
use crate::state::AppState;

/// POST /contact
///
/// Runs one submission and re-renders the page with its outcome. A filled
/// honeypot re-renders the form untouched.
pub async fn submit_contact(
    State(state): State<AppState>,
    Nav(nav): Nav,
    Form(form): Form<ContactForm>,
) -> Result<Rendered, AppError> {
    let mut session = ContactSession::new(form);
    session.submit(state.contact.as_ref()).await;
    info!(
        state = ?session.state,
        field_errors = session.errors.len(),
        "Contact form handled"
    );

    render_contact(&state.content, &nav, &session)
}
