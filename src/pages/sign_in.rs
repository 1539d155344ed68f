//! Sign-in page: exchanges credentials for a session and routes by role.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::config::RoutePaths;
use crate::guard::home_for;
use crate::net::types::SignInGrant;
use crate::session::Session;

/// Trim and require both fields.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Session to persist and the home page to open for a sign-in grant.
///
/// Returns `None` when the grant's role has no home page; nothing is stored then.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn session_for_grant(grant: SignInGrant, fallback_email: &str, paths: &RoutePaths) -> Option<(Session, String)> {
    let home = home_for(Some(&grant.role), paths)?.to_owned();
    let session = Session {
        token: grant.token,
        role: Some(grant.role),
        email: Some(grant.email.unwrap_or_else(|| fallback_email.to_owned())),
    };
    Some((session, home))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let config = expect_context::<crate::config::GuardConfig>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::api::AuthBackend;

            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let backend = crate::net::api::HttpBackend::new(config.api_base.clone());
                match backend.sign_in(&email_value, &password_value).await {
                    Ok(grant) => {
                        if let Some((session, home)) = session_for_grant(grant, &email_value, &config.paths) {
                            crate::session::SessionRepository::browser().set(&session);
                            log::debug!("sign-in: session stored; opening {home}");
                            navigate(&home, leptos_router::NavigateOptions::default());
                        } else {
                            log::warn!("sign-in: account role has no home page");
                            info.set("This account has no dashboard access.".to_owned());
                            busy.set(false);
                        }
                    }
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1>"Certificate Admin"</h1>
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-input"
                        type="email"
                        placeholder="registrar@university.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="sign-in-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="sign-in-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
