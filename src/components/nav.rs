//! Navigation bar with role-filtered links, manual refresh, and sign-out.

use leptos::prelude::*;

use crate::config::GuardConfig;
use crate::guard::GuardLifecycle;
use crate::routes::{RouteEntry, visible_routes};
use crate::session::SessionRepository;

/// Route manifest provided at the app root.
#[derive(Clone, Debug, Default)]
pub struct RouteTable(pub Vec<RouteEntry>);

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<GuardConfig>();
    let table = expect_context::<RouteTable>();
    let lifecycle = use_context::<GuardLifecycle>();

    let repo = SessionRepository::browser();
    let role = repo.role();
    let email = repo.get().and_then(|s| s.email).unwrap_or_default();

    let links = visible_routes(&table.0, role.as_ref())
        .into_iter()
        .map(|entry| {
            let href = entry.path.clone();
            let label = entry.label.clone();
            view! { <a class="nav__link" href=href>{label}</a> }
        })
        .collect_view();

    let busy = RwSignal::new(false);

    let refresh_delay = config.reload_delay;
    let on_refresh = move |_| {
        let Some(lifecycle) = lifecycle.clone() else {
            return;
        };
        if !lifecycle.begin_refresh() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::components::protected_route::reload_after(refresh_delay, &lifecycle).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = refresh_delay;
    };

    let api_base = config.api_base.clone();
    let sign_in_path = config.paths.sign_in.clone();
    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let api_base = api_base.clone();
            let sign_in_path = sign_in_path.clone();
            leptos::task::spawn_local(async move {
                let repo = SessionRepository::browser();
                let backend = crate::net::api::HttpBackend::new(api_base);
                let _ = crate::guard::sign_out(&repo, &backend).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&sign_in_path);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api_base, &sign_in_path);
    };

    view! {
        <nav class="nav">
            <span class="nav__brand">"Certificate Admin"</span>
            <div class="nav__links">{links}</div>
            <span class="nav__identity">{email}</span>
            <button class="btn" on:click=on_refresh disabled=move || busy.get()>"Refresh"</button>
            <button class="btn btn--danger" on:click=on_sign_out disabled=move || busy.get()>"Sign out"</button>
        </nav>
    }
}
