use serde::{Deserialize, Serialize};

use crate::club::Club;
use crate::coach::Coach;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::partner::Partner;
use crate::player::Player;
use crate::state_committee::StateCommittee;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Federation-wide counters shown to administrators.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_players: i64,
    pub total_coaches: i64,
    pub total_clubs: i64,
    pub total_partners: i64,
    pub total_states: i64,
    pub pending_approvals: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerStats {
    pub tournaments_played: i64,
    pub wins: i64,
    pub losses: i64,
    pub ranking_points: i64,
    pub ranking_position: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoachStats {
    pub players_coached: i64,
    pub active_teams: i64,
    pub certifications: i64,
    pub upcoming_sessions: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClubStats {
    pub total_players: i64,
    pub total_coaches: i64,
    pub active_teams: i64,
    pub tournaments_hosted: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PartnerStats {
    pub sponsored_clubs: i64,
    pub active_agreements: i64,
    pub events_sponsored: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StateStats {
    pub registered_clubs: i64,
    pub registered_players: i64,
    pub registered_coaches: i64,
    pub upcoming_events: i64,
}

// ---------------------------------------------------------------------------
// Per-role payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminDashboard {
    pub profile: User,
    #[serde(default)]
    pub stats: AdminStats,
    #[serde(default)]
    pub recent_users: Vec<User>,
    #[serde(default)]
    pub states: Vec<StateCommittee>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerDashboard {
    pub profile: Player,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<Club>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachDashboard {
    pub profile: Coach,
    #[serde(default)]
    pub stats: CoachStats,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubDashboard {
    pub profile: Club,
    #[serde(default)]
    pub stats: ClubStats,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerDashboard {
    pub profile: Partner,
    #[serde(default)]
    pub stats: PartnerStats,
    #[serde(default)]
    pub sponsored_clubs: Vec<Club>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateDashboard {
    pub profile: StateCommittee,
    #[serde(default)]
    pub stats: StateStats,
    #[serde(default)]
    pub clubs: Vec<Club>,
}

/// A role-specific dashboard. The backend sends the bare payload; the
/// variant is chosen by the role whose endpoint produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Admin(AdminDashboard),
    Player(PlayerDashboard),
    Coach(CoachDashboard),
    Club(ClubDashboard),
    Partner(PartnerDashboard),
    State(StateDashboard),
}

/// One label/value pair in a dashboard's stats grid.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

fn tile(label: &'static str, value: impl ToString) -> StatTile {
    StatTile {
        label,
        value: value.to_string(),
    }
}

impl Dashboard {
    /// Decode the JSON returned by `role`'s dashboard endpoint.
    pub fn decode(role: Role, value: serde_json::Value) -> Result<Self, AppError> {
        fn parse<T: serde::de::DeserializeOwned>(
            role: Role,
            value: serde_json::Value,
        ) -> Result<T, AppError> {
            serde_json::from_value(value).map_err(|e| {
                AppError::decode(format!("Unexpected {} dashboard payload: {}", role.as_str(), e))
            })
        }

        Ok(match role {
            Role::Admin => Dashboard::Admin(parse(role, value)?),
            Role::Player => Dashboard::Player(parse(role, value)?),
            Role::Coach => Dashboard::Coach(parse(role, value)?),
            Role::Club => Dashboard::Club(parse(role, value)?),
            Role::Partner => Dashboard::Partner(parse(role, value)?),
            Role::State => Dashboard::State(parse(role, value)?),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Admin(_) => Role::Admin,
            Dashboard::Player(_) => Role::Player,
            Dashboard::Coach(_) => Role::Coach,
            Dashboard::Club(_) => Role::Club,
            Dashboard::Partner(_) => Role::Partner,
            Dashboard::State(_) => Role::State,
        }
    }

    /// Name shown in the dashboard header.
    pub fn title(&self) -> String {
        match self {
            Dashboard::Admin(d) => d.profile.name.clone(),
            Dashboard::Player(d) => d.profile.full_name(),
            Dashboard::Coach(d) => d.profile.full_name(),
            Dashboard::Club(d) => d.profile.name.clone(),
            Dashboard::Partner(d) => d.profile.company_name.clone(),
            Dashboard::State(d) => d.profile.name.clone(),
        }
    }

    /// The profile record as raw JSON, exactly as the backend sent it.
    pub fn profile_json(&self) -> serde_json::Value {
        let result = match self {
            Dashboard::Admin(d) => serde_json::to_value(&d.profile),
            Dashboard::Player(d) => serde_json::to_value(&d.profile),
            Dashboard::Coach(d) => serde_json::to_value(&d.profile),
            Dashboard::Club(d) => serde_json::to_value(&d.profile),
            Dashboard::Partner(d) => serde_json::to_value(&d.profile),
            Dashboard::State(d) => serde_json::to_value(&d.profile),
        };
        result.unwrap_or(serde_json::Value::Null)
    }

    /// Summary counters in display order.
    pub fn stat_tiles(&self) -> Vec<StatTile> {
        match self {
            Dashboard::Admin(d) => vec![
                tile("Users", d.stats.total_users),
                tile("Players", d.stats.total_players),
                tile("Coaches", d.stats.total_coaches),
                tile("Clubs", d.stats.total_clubs),
                tile("Partners", d.stats.total_partners),
                tile("States", d.stats.total_states),
                tile("Pending approvals", d.stats.pending_approvals),
            ],
            Dashboard::Player(d) => vec![
                tile("Tournaments", d.stats.tournaments_played),
                tile("Wins", d.stats.wins),
                tile("Losses", d.stats.losses),
                tile("Win rate", format!("{:.1}%", win_rate(d.stats.wins, d.stats.losses))),
                tile("Ranking points", d.stats.ranking_points),
                tile(
                    "Ranking",
                    d.stats
                        .ranking_position
                        .map(|p| format!("#{p}"))
                        .unwrap_or_else(|| "Unranked".to_string()),
                ),
            ],
            Dashboard::Coach(d) => vec![
                tile("Players coached", d.stats.players_coached),
                tile("Active teams", d.stats.active_teams),
                tile("Certifications", d.stats.certifications),
                tile("Upcoming sessions", d.stats.upcoming_sessions),
            ],
            Dashboard::Club(d) => vec![
                tile("Players", d.stats.total_players),
                tile("Coaches", d.stats.total_coaches),
                tile("Active teams", d.stats.active_teams),
                tile("Tournaments hosted", d.stats.tournaments_hosted),
            ],
            Dashboard::Partner(d) => vec![
                tile("Sponsored clubs", d.stats.sponsored_clubs),
                tile("Active agreements", d.stats.active_agreements),
                tile("Events sponsored", d.stats.events_sponsored),
            ],
            Dashboard::State(d) => vec![
                tile("Clubs", d.stats.registered_clubs),
                tile("Players", d.stats.registered_players),
                tile("Coaches", d.stats.registered_coaches),
                tile("Upcoming events", d.stats.upcoming_events),
            ],
        }
    }
}

/// Percentage of decided matches won. Zero when nothing has been played.
/// Negative counts from the backend are treated as zero.
pub fn win_rate(wins: i64, losses: i64) -> f64 {
    let (wins, losses) = (wins.max(0), losses.max(0));
    let played = wins.saturating_add(losses);
    if played == 0 {
        return 0.0;
    }
    (wins as f64 / played as f64) * 100.0
}
