pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;

use crate::store::use_store;
use client::navigation::{guard, GuardDecision};
use client::ToastKind;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut, LdUser};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use dashboard::{AdminView, ClubView, CoachView, PartnerView, PlayerView, StateView};
use login::Login;
use not_found::NotFound;
use profile::{AdminProfile, ClubProfile, CoachProfile, PartnerProfile, PlayerProfile, StateProfile};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(RoleGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminView {},
    #[route("/admin/profile")]
    AdminProfile {},
    #[route("/player")]
    PlayerView {},
    #[route("/player/profile")]
    PlayerProfile {},
    #[route("/coach")]
    CoachView {},
    #[route("/coach/profile")]
    CoachProfile {},
    #[route("/club")]
    ClubView {},
    #[route("/club/profile")]
    ClubProfile {},
    #[route("/partner")]
    PartnerView {},
    #[route("/partner/profile")]
    PartnerProfile {},
    #[route("/state")]
    StateView {},
    #[route("/state/profile")]
    StateProfile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminView {},
            Role::Player => Route::PlayerView {},
            Role::Coach => Route::CoachView {},
            Role::Club => Route::ClubView {},
            Role::Partner => Route::PartnerView {},
            Role::State => Route::StateView {},
        }
    }

    pub fn profile(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminProfile {},
            Role::Player => Route::PlayerProfile {},
            Role::Coach => Route::CoachProfile {},
            Role::Club => Route::ClubProfile {},
            Role::Partner => Route::PartnerProfile {},
            Role::State => Route::StateProfile {},
        }
    }

    /// The role a route belongs to. `None` for routes any signed-in user may
    /// open.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AdminView {} | Route::AdminProfile {} => Some(Role::Admin),
            Route::PlayerView {} | Route::PlayerProfile {} => Some(Role::Player),
            Route::CoachView {} | Route::CoachProfile {} => Some(Role::Coach),
            Route::ClubView {} | Route::ClubProfile {} => Some(Role::Club),
            Route::PartnerView {} | Route::PartnerProfile {} => Some(Role::Partner),
            Route::StateView {} | Route::StateProfile {} => Some(Role::State),
            Route::Home {} | Route::Login {} | Route::NotFound { .. } => None,
        }
    }
}

/// Keeps signed-out users on the login page and each role inside its own
/// views.
#[component]
fn RoleGuard() -> Element {
    let app = use_store();
    let route: Route = use_route();

    if !app.is_ready() {
        return rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        };
    }

    let state = app.snapshot();
    match guard(route.required_role(), &state.auth) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectTo(path) => {
            match path.parse::<Route>() {
                Ok(target) => navigator().replace(target),
                Err(_) => navigator().replace(Route::Login {}),
            };
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// `/` sends each user to their own dashboard.
#[component]
fn Home() -> Element {
    let app = use_store();
    if let Some(role) = app.snapshot().auth.role() {
        navigator().replace(Route::dashboard(role));
    }
    rsx! {}
}

/// Top navbar around every signed-in view.
#[component]
fn AppLayout() -> Element {
    let app = use_store();
    let route: Route = use_route();
    let state = app.snapshot();
    let busy = state.loading.is_busy();

    let Some(user) = state.auth.user else {
        return rsx! { Outlet::<Route> {} };
    };
    let role = user.role;
    let dashboard_class = nav_class(route == Route::dashboard(role));
    let profile_class = nav_class(route == Route::profile(role));

    rsx! {
        div { class: "app-shell",
            header { class: "app-navbar",
                div { class: "app-brand",
                    span { class: "app-brand-name", "Federation" }
                    if busy {
                        span { class: "app-busy", "aria-label": "Loading" }
                    }
                }
                nav { class: "app-nav",
                    Link {
                        to: Route::dashboard(role),
                        class: dashboard_class,
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::profile(role),
                        class: profile_class,
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "Profile"
                    }
                }
                div { class: "app-user",
                    span { class: "app-user-name", "{user.name}" }
                    Badge { variant: BadgeVariant::Secondary, {role.display_name()} }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            app.logout();
                            app.toast(ToastKind::Info, "You have been signed out");
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Log out"
                    }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "app-nav-link active"
    } else {
        "app-nav-link"
    }
}
