//! Certificate-holder landing page.

use leptos::prelude::*;

use crate::session::SessionRepository;

#[component]
pub fn UserStatusPage() -> impl IntoView {
    let email = SessionRepository::browser()
        .get()
        .and_then(|s| s.email)
        .unwrap_or_else(|| "your account".to_owned());

    view! {
        <section class="page">
            <h2>"My Certificates"</h2>
            <p>"Certificates and verification requests for " {email} "."</p>
        </section>
    }
}
