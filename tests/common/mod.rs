#![allow(dead_code)]

use async_trait::async_trait;
use http::{Method, StatusCode};
use puppy_bowl::api::{ApiError, ApiRequest, ApiResponse, Fetch, PlayerApi};
use puppy_bowl::config::ApiConfig;
use puppy_bowl::models::{NewPlayer, Player, PlayerId};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub static TEST_ROOT: &str = "http://puppy-bowl.test/api/";
pub static TEST_COHORT: &str = "test-cohort";

/// In-memory stand-in for the Puppy Bowl API. Assigns ids the way the
/// server does and records every request it sees.
pub struct RosterDouble {
    players: RefCell<Vec<Player>>,
    next_id: Cell<PlayerId>,
    requests: RefCell<Vec<(Method, String)>>,
    reject_creates: Cell<bool>,
    offline: Cell<bool>,
}

impl RosterDouble {
    pub fn new(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        RosterDouble {
            players: RefCell::new(players),
            next_id: Cell::new(next_id),
            requests: RefCell::new(Vec::new()),
            reject_creates: Cell::new(false),
            offline: Cell::new(false),
        }
    }

    pub fn reject_creates(&self) {
        self.reject_creates.set(true);
    }

    /// Every later request fails the way a rejected `fetch` does.
    pub fn go_offline(&self) {
        self.offline.set(true);
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: &Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.borrow().iter().map(|p| p.id).collect()
    }

    fn reply(status: StatusCode, body: serde_json::Value) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    fn not_found(id: &str) -> ApiResponse {
        RosterDouble::reply(
            StatusCode::NOT_FOUND,
            json!({"success": false, "error": {"message": format!("No player with id {}", id)}, "data": null}),
        )
    }
}

#[async_trait(?Send)]
impl Fetch for RosterDouble {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let prefix = format!("/api/{}/", TEST_COHORT);
        let path = request
            .url
            .path()
            .strip_prefix(prefix.as_str())
            .unwrap_or("")
            .to_owned();
        self.requests
            .borrow_mut()
            .push((request.method.clone(), path.clone()));
        if self.offline.get() {
            return Err(ApiError::Transport("TypeError: Failed to fetch".to_owned()));
        }

        let segments: Vec<&str> = path.split('/').collect();
        let resp = match (&request.method, segments.as_slice()) {
            (&Method::GET, ["players"]) => {
                let players = self.players.borrow().clone();
                RosterDouble::reply(
                    StatusCode::OK,
                    json!({"success": true, "error": null, "data": {"players": players}}),
                )
            }
            (&Method::POST, ["players"]) => {
                let body = request.body.as_deref().unwrap_or("");
                match serde_json::from_str::<NewPlayer>(body) {
                    Ok(new_player) if !self.reject_creates.get() => {
                        let id = self.next_id.get();
                        self.next_id.set(id + 1);
                        let created = player(
                            id,
                            &new_player.name,
                            &new_player.breed,
                            &new_player.status,
                            &new_player.image_url,
                        );
                        self.players.borrow_mut().push(created.clone());
                        RosterDouble::reply(
                            StatusCode::OK,
                            json!({"success": true, "error": null, "data": {"newPlayer": created}}),
                        )
                    }
                    _ => RosterDouble::reply(
                        StatusCode::BAD_REQUEST,
                        json!({"success": false, "error": {"message": "invalid player"}, "data": null}),
                    ),
                }
            }
            (&Method::GET, ["players", id]) => {
                let found = self
                    .players
                    .borrow()
                    .iter()
                    .find(|p| id.parse::<PlayerId>().ok() == Some(p.id))
                    .cloned();
                match found {
                    Some(p) => RosterDouble::reply(
                        StatusCode::OK,
                        json!({"success": true, "error": null, "data": {"player": p}}),
                    ),
                    None => RosterDouble::not_found(id),
                }
            }
            (&Method::DELETE, ["players", id]) => {
                let mut players = self.players.borrow_mut();
                match players.iter().position(|p| id.parse::<PlayerId>().ok() == Some(p.id)) {
                    Some(idx) => {
                        players.remove(idx);
                        RosterDouble::reply(
                            StatusCode::OK,
                            json!({"success": true, "error": null, "data": null}),
                        )
                    }
                    None => RosterDouble::not_found(id),
                }
            }
            _ => RosterDouble::reply(StatusCode::NOT_FOUND, json!({"success": false})),
        };
        Ok(resp)
    }
}

pub fn player(id: PlayerId, name: &str, breed: &str, status: &str, image_url: &str) -> Player {
    Player {
        id,
        name: name.to_owned(),
        breed: breed.to_owned(),
        status: status.to_owned(),
        image_url: image_url.to_owned(),
        team_id: None,
        cohort_id: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn new_player(name: &str, breed: &str, status: &str, image_url: &str) -> NewPlayer {
    NewPlayer {
        name: name.to_owned(),
        breed: breed.to_owned(),
        status: status.to_owned(),
        image_url: image_url.to_owned(),
    }
}

pub fn api_with(players: Vec<Player>) -> PlayerApi<RosterDouble> {
    let config = ApiConfig::new(TEST_ROOT, TEST_COHORT).unwrap();
    PlayerApi::new(config, RosterDouble::new(players))
}

/// Like `api_with`, but the test keeps its own handle on the double, so it
/// can still inspect requests after the api (and whatever owns it) is gone.
pub fn shared_api(players: Vec<Player>) -> (PlayerApi<Rc<RosterDouble>>, Rc<RosterDouble>) {
    let config = ApiConfig::new(TEST_ROOT, TEST_COHORT).unwrap();
    let server = Rc::new(RosterDouble::new(players));
    (PlayerApi::new(config, server.clone()), server)
}
