//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{nav::NavBar, nav::RouteTable, notice_banner::NoticeBanner, protected_route::ProtectedRoute};
use crate::config::{ADMIN_HOME_PATH, GuardConfig, USER_HOME_PATH};
use crate::pages::{
    account::AccountPage, admin_dashboard::AdminDashboardPage, sign_in::SignInPage, user_status::UserStatusPage,
};
use crate::routes::{access_for, route_table};
use crate::state::notice::NoticeState;

const ACCOUNT_PATH: &str = "/account";

/// Root application component.
///
/// Provides shared contexts and wraps every dashboard page in `ProtectedRoute`
/// with the access policy from the route manifest.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GuardConfig::from_build_env();
    let routes = route_table();
    let admin_access = access_for(&routes, ADMIN_HOME_PATH);
    let user_access = access_for(&routes, USER_HOME_PATH);
    let account_access = access_for(&routes, ACCOUNT_PATH);
    let sign_in_path = config.paths.sign_in.clone();

    provide_context(config);
    provide_context(RouteTable(routes));
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Certificate Admin"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=move || {
                        view! {
                            <ProtectedRoute allowed_roles=admin_access.clone()>
                                <NavBar/>
                                <AdminDashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("status"))
                    view=move || {
                        view! {
                            <ProtectedRoute allowed_roles=user_access.clone()>
                                <NavBar/>
                                <UserStatusPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("account")
                    view=move || {
                        view! {
                            <ProtectedRoute allowed_roles=account_access.clone()>
                                <NavBar/>
                                <AccountPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("")
                    view=move || view! { <Redirect path=sign_in_path.clone()/> }
                />
            </Routes>
        </Router>
    }
}
