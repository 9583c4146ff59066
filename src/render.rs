use crate::models::{Player, PlayerId};
use crate::{console_errorf, HBARS, PLAYER_LIST_TEMPLATE};
use handlebars::RenderError;
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub static DETAILS_BUTTON_CLASS: &str = "details-button";
pub static REMOVE_BUTTON_CLASS: &str = "remove-button";
pub static PLAYER_ID_ATTR: &str = "data-player-id";

#[derive(Serialize)]
pub struct PlayerCard<'a> {
    pub id: PlayerId,
    pub name: &'a str,
    pub breed: &'a str,
    pub status: &'a str,
    pub image_url: &'a str,
}

impl<'a> From<&'a Player> for PlayerCard<'a> {
    fn from(player: &'a Player) -> Self {
        PlayerCard {
            id: player.id,
            name: &player.name,
            breed: &player.breed,
            status: &player.status,
            image_url: &player.image_url,
        }
    }
}

/// Renders one card per player. An empty list renders nothing at all, so
/// the caller leaves whatever is on the page alone.
pub fn render_roster(players: &[Player]) -> Result<Option<String>, RenderError> {
    if players.is_empty() {
        console_errorf!("Player data is not in the expected format or the list is empty.");
        return Ok(None);
    }

    #[derive(Serialize)]
    struct Data<'a> {
        players: Vec<PlayerCard<'a>>,
    }
    let data = Data {
        players: players.iter().map(PlayerCard::from).collect(),
    };
    HBARS.render(PLAYER_LIST_TEMPLATE, &data).map(Some)
}

/// A click on one of a card's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Details(PlayerId),
    Remove(PlayerId),
}

type Listener = Closure<dyn FnMut(Event)>;

/// The players container and the click listeners bound into its current
/// contents.
pub struct RosterView {
    container: Element,
    listeners: Vec<Listener>,
}

impl RosterView {
    pub fn new(container: Element) -> Self {
        RosterView {
            container,
            listeners: Vec::new(),
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Replaces the container's contents with the rendered roster and binds
    /// `on_action` to every card control. Returns false, touching nothing,
    /// when there is nothing to render.
    pub fn render(
        &mut self,
        players: &[Player],
        on_action: Rc<dyn Fn(CardAction)>,
    ) -> Result<bool, JsValue> {
        let html = match render_roster(players) {
            Ok(Some(html)) => html,
            Ok(None) => return Ok(false),
            Err(e) => {
                console_errorf!("Uh oh, trouble rendering players! {}", e);
                return Err(JsValue::from_str(&e.to_string()));
            }
        };

        self.container.set_inner_html(&html);
        // the old nodes are gone, so are the listeners bound to them
        self.listeners.clear();
        self.bind(DETAILS_BUTTON_CLASS, CardAction::Details, &on_action)?;
        self.bind(REMOVE_BUTTON_CLASS, CardAction::Remove, &on_action)?;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.container.set_inner_html("");
        self.listeners.clear();
    }

    fn bind(
        &mut self,
        class: &str,
        action: fn(PlayerId) -> CardAction,
        on_action: &Rc<dyn Fn(CardAction)>,
    ) -> Result<(), JsValue> {
        let buttons = self.container.query_selector_all(&format!(".{}", class))?;
        for i in 0..buttons.length() {
            let button: Element = match buttons.item(i) {
                Some(node) => node.dyn_into()?,
                None => continue,
            };
            let id: PlayerId = match button.get_attribute(PLAYER_ID_ATTR).map(|v| v.parse()) {
                Some(Ok(id)) => id,
                _ => {
                    console_errorf!("{} without a usable {}", class, PLAYER_ID_ATTR);
                    continue;
                }
            };

            let on_action = on_action.clone();
            let listener = Closure::wrap(Box::new(move |_event: Event| {
                on_action(action(id));
            }) as Box<dyn FnMut(Event)>);
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            self.listeners.push(listener);
        }
        Ok(())
    }
}
