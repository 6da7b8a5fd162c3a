use serde::Deserialize;
use tracing::debug;

use fc_core::session::TeamMembership;
use fc_core::{ActingUser, Role, TeamId};

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRoleDto {
    pub id: u32,
    pub role: Option<String>,
}

/// The acting user as returned by the "me" endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserDto {
    pub global_role: Option<String>,
    pub teams: Vec<TeamRoleDto>,
}

impl UserDto {
    pub fn from_json(json: &str) -> Result<ActingUser, serde_json::Error> {
        let body = super::unwrap_envelope(serde_json::from_str(json)?, &["user"]);
        Ok(serde_json::from_value::<UserDto>(body)?.into())
    }
}

impl From<UserDto> for ActingUser {
    /// Unrecognized roles grant nothing.
    fn from(dto: UserDto) -> Self {
        let global_role = dto.global_role.as_deref().and_then(|name| {
            let role = Role::from_api(name);
            if role.is_none() {
                debug!(role = name, "unrecognized global role, ignoring");
            }
            role
        });

        let teams = dto
            .teams
            .into_iter()
            .filter_map(|team| {
                let role = team.role.as_deref().and_then(Role::from_api);
                if role.is_none() {
                    debug!(team_id = team.id, role = ?team.role, "unrecognized team role, ignoring");
                }
                role.map(|role| TeamMembership {
                    team_id: TeamId::new(team.id),
                    role,
                })
            })
            .collect();

        ActingUser { global_role, teams }
    }
}
