use shared_types::{Dashboard, Role};

use super::resource::AsyncResource;

/// One dashboard resource per role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSlices {
    admin: AsyncResource<Dashboard>,
    player: AsyncResource<Dashboard>,
    coach: AsyncResource<Dashboard>,
    club: AsyncResource<Dashboard>,
    partner: AsyncResource<Dashboard>,
    state: AsyncResource<Dashboard>,
}

impl DashboardSlices {
    pub fn get(&self, role: Role) -> &AsyncResource<Dashboard> {
        match role {
            Role::Admin => &self.admin,
            Role::Player => &self.player,
            Role::Coach => &self.coach,
            Role::Club => &self.club,
            Role::Partner => &self.partner,
            Role::State => &self.state,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut AsyncResource<Dashboard> {
        match role {
            Role::Admin => &mut self.admin,
            Role::Player => &mut self.player,
            Role::Coach => &mut self.coach,
            Role::Club => &mut self.club,
            Role::Partner => &mut self.partner,
            Role::State => &mut self.state,
        }
    }

    pub fn reset_all(&mut self) {
        for role in Role::ALL {
            self.get_mut(role).reset();
        }
    }

    pub fn all_empty(&self) -> bool {
        Role::ALL.iter().all(|role| self.get(*role).is_empty())
    }
}
