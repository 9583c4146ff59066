use serde::{Deserialize, Deserializer, Serialize};

pub type PlayerId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    // assigned by the server, never by us
    pub id: PlayerId,
    // a record with a blank field still gets a card
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub breed: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create request. Has no id: the server assigns one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

/// Every response from the API is wrapped as `{success, error, data}`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Deserialize, Debug)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Deserialize, Debug)]
pub struct NewPlayerData {
    #[serde(rename = "newPlayer")]
    pub new_player: Player,
}
