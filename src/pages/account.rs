//! Account page shared by every signed-in role.

use leptos::prelude::*;

use crate::session::SessionRepository;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = SessionRepository::browser().get();
    let email = session.as_ref().and_then(|s| s.email.clone()).unwrap_or_else(|| "—".to_owned());
    let role = session
        .and_then(|s| s.role)
        .map_or_else(|| "—".to_owned(), |r| r.to_string());

    view! {
        <section class="page">
            <h2>"Account"</h2>
            <div class="page__row">
                <span class="page__label">"Email"</span>
                <span class="page__value">{email}</span>
            </div>
            <div class="page__row">
                <span class="page__label">"Role"</span>
                <span class="page__value">{role}</span>
            </div>
        </section>
    }
}
