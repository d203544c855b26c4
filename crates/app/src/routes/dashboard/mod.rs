mod tables;

use crate::routes::Route;
use crate::store::use_store;
use dioxus::prelude::*;
use shared_types::{Dashboard, Role};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, Skeleton, StatCard, StatGrid, StatusBadge,
};
use tables::{ClubCard, ClubsTable, CoachesTable, PlayersTable, StatesTable, UsersTable};

/// Number of skeleton placeholders shown while data is loading.
const SKELETON_COUNT: usize = 4;

#[component]
pub fn AdminView() -> Element {
    rsx! { DashboardPage { role: Role::Admin } }
}

#[component]
pub fn PlayerView() -> Element {
    rsx! { DashboardPage { role: Role::Player } }
}

#[component]
pub fn CoachView() -> Element {
    rsx! { DashboardPage { role: Role::Coach } }
}

#[component]
pub fn ClubView() -> Element {
    rsx! { DashboardPage { role: Role::Club } }
}

#[component]
pub fn PartnerView() -> Element {
    rsx! { DashboardPage { role: Role::Partner } }
}

#[component]
pub fn StateView() -> Element {
    rsx! { DashboardPage { role: Role::State } }
}

/// A role's dashboard: fetched on mount, then stats and related tables.
#[component]
fn DashboardPage(role: Role) -> Element {
    let app = use_store();
    use_hook(move || app.fetch_dashboard(role));

    let state = app.snapshot();
    let slice = state.dashboards.get(role).clone();

    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "{role.display_name()} dashboard" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: slice.loading,
                        onclick: move |_| app.fetch_dashboard(role),
                        "Refresh"
                    }
                    Button {
                        onclick: move |_| {
                            navigator().push(Route::profile(role));
                        },
                        "Edit profile"
                    }
                }
            }

            match (slice.data, slice.error) {
                (None, None) => rsx! { LoadingSkeletons {} },
                (None, Some(message)) => rsx! {
                    ErrorCard { message, on_retry: move |_| app.fetch_dashboard(role) }
                },
                (Some(dashboard), error) => rsx! {
                    if let Some(message) = error {
                        div { class: "dashboard-stale", role: "alert",
                            "{message} Showing the last loaded data."
                        }
                    }
                    DashboardBody { dashboard }
                },
            }
        }
    }
}

#[component]
pub fn ErrorCard(message: String, on_retry: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Card { class: "dashboard-error",
            CardHeader {
                CardTitle { "Error" }
                CardDescription { "Failed to load dashboard data." }
            }
            CardContent {
                p { class: "dashboard-error-text", "{message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| on_retry.call(evt),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn LoadingSkeletons() -> Element {
    rsx! {
        StatGrid {
            for i in 0..SKELETON_COUNT {
                Skeleton { key: "{i}", class: "skeleton-stat" }
            }
        }
        Skeleton { class: "skeleton-table" }
    }
}

#[component]
fn DashboardBody(dashboard: Dashboard) -> Element {
    let tiles = dashboard.stat_tiles();
    let title = dashboard.title();
    let status = profile_status(&dashboard);

    rsx! {
        div { class: "dashboard-profile",
            h2 { class: "dashboard-profile-name", "{title}" }
            if let Some(status) = status {
                StatusBadge { status }
            }
        }
        StatGrid {
            for tile in tiles {
                StatCard { key: "{tile.label}", label: tile.label.to_string(), value: tile.value }
            }
        }
        match dashboard {
            Dashboard::Admin(d) => rsx! {
                UsersTable { users: d.recent_users }
                StatesTable { states: d.states }
            },
            Dashboard::Player(d) => rsx! {
                if let Some(club) = d.club {
                    ClubCard { club }
                } else {
                    p { class: "dashboard-empty", "You are not registered with a club yet." }
                }
            },
            Dashboard::Coach(d) => rsx! {
                PlayersTable { title: "My players", players: d.players }
            },
            Dashboard::Club(d) => rsx! {
                PlayersTable { title: "Players", players: d.players }
                CoachesTable { coaches: d.coaches }
            },
            Dashboard::Partner(d) => rsx! {
                ClubsTable { title: "Sponsored clubs", clubs: d.sponsored_clubs }
            },
            Dashboard::State(d) => rsx! {
                ClubsTable { title: "Registered clubs", clubs: d.clubs }
            },
        }
    }
}

/// Membership status shown next to the profile name, where the role has one.
fn profile_status(dashboard: &Dashboard) -> Option<String> {
    match dashboard {
        Dashboard::Admin(d) => Some(if d.profile.active { "active" } else { "inactive" }.to_string()),
        Dashboard::Player(d) => Some(d.profile.status.clone()),
        Dashboard::Coach(d) => Some(d.profile.status.clone()),
        Dashboard::Club(d) => Some(d.profile.status.clone()),
        Dashboard::Partner(d) => Some(d.profile.status.clone()),
        Dashboard::State(_) => None,
    }
}
