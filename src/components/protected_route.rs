//! `ProtectedRoute`: session guard around a route page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the stored session is validated against the backend profile
//! (`guard::check_session`). The resulting state is mapped to a render or
//! redirect by `guard::decide`. A polling loop reloads the page every
//! refresh interval so the check re-runs with fresh backend state.
//!
//! The guard is a UX gate. The backend must still authorize every request.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::GuardConfig;
use crate::guard::{GuardLifecycle, GuardOutcome, GuardState, RouteAccess, decide};
use crate::state::notice::{NoticeLevel, NoticeState};

/// Render `children` only for a valid session whose role `allowed_roles` permits.
#[component]
pub fn ProtectedRoute(
    children: ChildrenFn,
    /// Roles allowed on this route; unrestricted when omitted.
    #[prop(optional, into)]
    allowed_roles: RouteAccess,
    /// Override of the configured refresh interval, in milliseconds.
    #[prop(optional)]
    refresh_timeout_ms: Option<u64>,
) -> impl IntoView {
    let config = expect_context::<GuardConfig>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let state = RwSignal::new(GuardState::Checking);
    let lifecycle = GuardLifecycle::new();
    provide_context(lifecycle.clone());

    let refresh_timeout = refresh_timeout_ms
        .filter(|ms| *ms > 0)
        .map_or(config.refresh_timeout, Duration::from_millis);

    let access = StoredValue::new(allowed_roles);
    let paths = config.paths.clone();
    let outcome = Memo::new(move |_| access.with_value(|access| decide(&state.get(), access, &paths)));

    #[cfg(feature = "csr")]
    {
        let check_lifecycle = lifecycle.clone();
        let api_base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            let repo = crate::session::SessionRepository::browser();
            let backend = crate::net::api::HttpBackend::new(api_base);
            let result = crate::guard::check_session(&repo, &backend).await;
            if check_lifecycle.accepts_check_result() {
                state.set(GuardState::from_check(result));
            } else {
                log::debug!("guard: discarding stale session check");
            }
        });

        let poll = lifecycle.clone();
        let reload_delay = config.reload_delay;
        // Unmount cancels via the liveness flag: the loop exits on its next wake.
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(refresh_timeout).await;
                if !poll.is_mounted() {
                    break;
                }
                if !poll.begin_refresh() {
                    continue;
                }
                reload_after(reload_delay, &poll).await;
                break;
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = refresh_timeout;
    }

    on_cleanup(move || lifecycle.unmount());

    let sign_in_path = config.paths.sign_in.clone();
    #[cfg(feature = "csr")]
    let api_base = config.api_base.clone();
    Effect::new(move || match outcome.get() {
        GuardOutcome::Redirect { to, notice: message, reason } => {
            if reason.is_configuration() {
                log::error!("guard: route misconfigured ({reason}); redirecting to {to}");
            } else {
                log::warn!("guard: denied ({reason}); redirecting to {to}");
            }
            if let Some(message) = message {
                notice.update(|n| n.show(message, NoticeLevel::Error));
            }
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        GuardOutcome::ForceSignOut { reason } => {
            log::warn!("guard: denied ({reason}); signing out");
            notice.update(|n| n.show(crate::guard::FORBIDDEN_NOTICE, NoticeLevel::Error));
            #[cfg(feature = "csr")]
            {
                let api_base = api_base.clone();
                let sign_in_path = sign_in_path.clone();
                leptos::task::spawn_local(async move {
                    let repo = crate::session::SessionRepository::browser();
                    let backend = crate::net::api::HttpBackend::new(api_base);
                    // Failure is logged inside sign_out; the redirect happens regardless.
                    let _ = crate::guard::sign_out(&repo, &backend).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&sign_in_path);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            navigate(&sign_in_path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        GuardOutcome::Loading | GuardOutcome::Render => {}
    });

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Loading => view! { <div class="guard-status">"Checking session..."</div> }.into_any(),
        GuardOutcome::Redirect { .. } | GuardOutcome::ForceSignOut { .. } => {
            view! { <div class="guard-status">"Redirecting..."</div> }.into_any()
        }
    }
}

/// Reload the document after `delay`, unless the route unmounted meanwhile.
#[cfg(feature = "csr")]
pub async fn reload_after(delay: Duration, lifecycle: &GuardLifecycle) {
    gloo_timers::future::sleep(delay).await;
    if !lifecycle.is_mounted() {
        return;
    }
    log::debug!("guard: reloading to refresh session");
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
