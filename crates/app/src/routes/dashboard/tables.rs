use dioxus::prelude::*;
use shared_types::{Club, Coach, Player, StateCommittee, User};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, StatusBadge,
};

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn active_label(active: bool) -> String {
    if active { "active" } else { "inactive" }.to_string()
}

#[component]
pub fn UsersTable(users: Vec<User>) -> Element {
    rsx! {
        Card { class: "dashboard-table",
            CardHeader { CardTitle { "Recent users" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Role" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if users.is_empty() {
                            DataTableEmpty { columns: 4, message: "No users registered yet" }
                        }
                        for user in users {
                            DataTableRow { key: "{user.id}",
                                DataTableCell { "{user.name}" }
                                DataTableCell { "{user.email}" }
                                DataTableCell { "{user.role.display_name()}" }
                                DataTableCell {
                                    StatusBadge { status: active_label(user.active) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatesTable(states: Vec<StateCommittee>) -> Element {
    rsx! {
        Card { class: "dashboard-table",
            CardHeader { CardTitle { "State committees" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Committee" }
                        DataTableColumn { "President" }
                        DataTableColumn { "Email" }
                    }
                    DataTableBody {
                        if states.is_empty() {
                            DataTableEmpty { columns: 3, message: "No state committees yet" }
                        }
                        for committee in states {
                            DataTableRow { key: "{committee.id}",
                                DataTableCell { "{committee.name}" }
                                DataTableCell { {or_dash(&committee.president_name)} }
                                DataTableCell { "{committee.email}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PlayersTable(title: String, players: Vec<Player>) -> Element {
    rsx! {
        Card { class: "dashboard-table",
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Position" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if players.is_empty() {
                            DataTableEmpty { columns: 4, message: "No players yet" }
                        }
                        for player in players {
                            DataTableRow { key: "{player.id}",
                                DataTableCell { {player.full_name()} }
                                DataTableCell { {or_dash(&player.position)} }
                                DataTableCell { "{player.email}" }
                                DataTableCell { StatusBadge { status: player.status.clone() } }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CoachesTable(coaches: Vec<Coach>) -> Element {
    rsx! {
        Card { class: "dashboard-table",
            CardHeader { CardTitle { "Coaches" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Certification" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if coaches.is_empty() {
                            DataTableEmpty { columns: 4, message: "No coaches yet" }
                        }
                        for coach in coaches {
                            DataTableRow { key: "{coach.id}",
                                DataTableCell { {coach.full_name()} }
                                DataTableCell { {or_dash(&coach.certification_level)} }
                                DataTableCell { "{coach.email}" }
                                DataTableCell { StatusBadge { status: coach.status.clone() } }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClubsTable(title: String, clubs: Vec<Club>) -> Element {
    rsx! {
        Card { class: "dashboard-table",
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Club" }
                        DataTableColumn { "President" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if clubs.is_empty() {
                            DataTableEmpty { columns: 4, message: "No clubs yet" }
                        }
                        for club in clubs {
                            DataTableRow { key: "{club.id}",
                                DataTableCell { "{club.name}" }
                                DataTableCell { {or_dash(&club.president_name)} }
                                DataTableCell { "{club.email}" }
                                DataTableCell { StatusBadge { status: club.status.clone() } }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The club a player is registered with.
#[component]
pub fn ClubCard(club: Club) -> Element {
    rsx! {
        Card { class: "dashboard-club",
            CardHeader { CardTitle { "My club" } }
            CardContent {
                div { class: "dashboard-club-body",
                    if let Some(logo) = club.logo_url.clone() {
                        img { class: "dashboard-club-logo", src: "{logo}", alt: "{club.name}" }
                    }
                    dl {
                        dt { "Name" }
                        dd { "{club.name}" }
                        dt { "Email" }
                        dd { "{club.email}" }
                        dt { "Phone" }
                        dd { {or_dash(&club.phone)} }
                        dt { "President" }
                        dd { {or_dash(&club.president_name)} }
                    }
                }
            }
        }
    }
}
