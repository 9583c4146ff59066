use crate::api::{ApiError, Fetch, PlayerApi};
use crate::console_errorf;
use crate::models::{NewPlayer, Player, PlayerId};
use std::cell::RefCell;

/// The client's view of the remote collection: the API plus the list it
/// last fetched.
///
/// This is the error boundary. Every failure is logged here; the `Result`
/// is still handed back, but nothing above this layer has to look at it.
/// The snapshot is only replaced after a fetch completes, so no borrow is
/// ever held across an await point.
pub struct Roster<F> {
    api: PlayerApi<F>,
    players: RefCell<Vec<Player>>,
}

impl<F: Fetch> Roster<F> {
    pub fn new(api: PlayerApi<F>) -> Self {
        Roster {
            api,
            players: RefCell::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &PlayerApi<F> {
        &self.api
    }

    /// The last fetched list.
    pub fn snapshot(&self) -> Vec<Player> {
        self.players.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.players.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.borrow().is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.borrow().iter().any(|p| p.id == id)
    }

    /// Re-fetches the whole collection. On failure the previous snapshot is
    /// kept.
    pub async fn refresh(&self) -> Result<Vec<Player>, ApiError> {
        match self.api.list_players().await {
            Ok(players) => {
                *self.players.borrow_mut() = players.clone();
                Ok(players)
            }
            Err(e) => {
                console_errorf!("Uh oh, trouble fetching players! {}", e);
                Err(e)
            }
        }
    }

    /// Creates a player, then re-fetches whether or not the create worked.
    /// The returned list is the refreshed one.
    pub async fn add(&self, new_player: NewPlayer) -> Result<Vec<Player>, ApiError> {
        if let Err(e) = self.api.create_player(&new_player).await {
            console_errorf!("Oops, something went wrong with adding that player! {}", e);
        }
        self.refresh().await
    }

    pub async fn details(&self, id: PlayerId) -> Result<Player, ApiError> {
        self.api.get_player(id).await.map_err(|e| {
            console_errorf!("Oh no, trouble fetching player #{}! {}", id, e);
            e
        })
    }

    /// Removes a player remotely. The snapshot is left alone: the caller
    /// decides when to refresh.
    pub async fn remove(&self, id: PlayerId) -> Result<(), ApiError> {
        self.api.remove_player(id).await.map_err(|e| {
            console_errorf!(
                "Whoops, trouble removing player #{} from the roster! {}",
                id,
                e
            );
            e
        })
    }
}
