//! Admin landing page.

use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Administration"</h2>
            <p>"Register, edit, and verify certificates, manage accounts, and review verification requests."</p>
        </section>
    }
}
