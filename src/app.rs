use crate::api::{Fetch, PlayerApi};
use crate::config::{AfterRemove, ApiConfig, AppConfig};
use crate::extensions::*;
use crate::fetch::BrowserFetch;
use crate::form;
use crate::models::{NewPlayer, Player, PlayerId};
use crate::render::{CardAction, RosterView};
use crate::roster::Roster;
use crate::{console_errorf, utils};
use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

pub static PLAYERS_CONTAINER_ID: &str = "all-players-container";

thread_local! {
    // Apps that have been mounted onto the page. Listeners only hold weak
    // references, so this is what keeps them answering after `boot` returns.
    static MOUNTED: RefCell<Vec<Rc<dyn Any>>> = RefCell::new(Vec::new());
}

/// Ties the roster to the page: renders it, and turns clicks and form
/// submissions into roster operations.
pub struct App<F> {
    roster: Roster<F>,
    view: RefCell<RosterView>,
    window: Window,
    document: Document,
    config: AppConfig,
}

impl<F: Fetch + 'static> App<F> {
    pub fn new(
        roster: Roster<F>,
        view: RosterView,
        window: Window,
        config: AppConfig,
    ) -> Result<Rc<Self>, JsValue> {
        let document = window
            .document()
            .ok_or_js_err_with_msg("window has no document")?;
        Ok(Rc::new(App {
            roster,
            view: RefCell::new(view),
            window,
            document,
            config,
        }))
    }

    pub fn roster(&self) -> &Roster<F> {
        &self.roster
    }

    /// Initial load: fetch and render, set up the form, then start listening
    /// for submissions. From here on the page owns the app: it stays alive
    /// after every other handle to it is dropped.
    pub async fn run(self: &Rc<Self>) -> Result<(), JsValue> {
        let mounted: Rc<dyn Any> = self.clone();
        MOUNTED.with(|apps| apps.borrow_mut().push(mounted));

        if let Ok(players) = self.roster.refresh().await {
            self.render(&players)?;
            form::render_new_player_form(&self.document)?;
        }

        let add_player_form = self
            .document
            .get_element_by_id(form::ADD_PLAYER_FORM_ID)
            .ok_or_js_err_with_msg("missing #add-player-form")?;

        let app = Rc::downgrade(self);
        form::bind_submit(&add_player_form, self.document.clone(), move |new_player| {
            if let Some(app) = app.upgrade() {
                spawn_local(async move { app.add_player(new_player).await });
            }
        })
    }

    fn render(self: &Rc<Self>, players: &[Player]) -> Result<bool, JsValue> {
        let app: Weak<Self> = Rc::downgrade(self);
        let on_action: Rc<dyn Fn(CardAction)> = Rc::new(move |action: CardAction| {
            if let Some(app) = app.upgrade() {
                app.dispatch(action);
            }
        });
        self.view.borrow_mut().render(players, on_action)
    }

    pub fn dispatch(self: &Rc<Self>, action: CardAction) {
        let app = self.clone();
        match action {
            CardAction::Details(id) => spawn_local(async move {
                let _ = app.roster.details(id).await;
            }),
            CardAction::Remove(id) => spawn_local(async move { app.remove_player(id).await }),
        }
    }

    pub async fn add_player(self: &Rc<Self>, new_player: NewPlayer) {
        // `add` refreshes even when the create failed
        if let Ok(players) = self.roster.add(new_player).await {
            if let Err(e) = self.render(&players) {
                console_errorf!("Error while adding the player to the API {:?}", e);
            }
        }
    }

    pub async fn remove_player(self: &Rc<Self>, id: PlayerId) {
        if self.roster.remove(id).await.is_err() {
            return;
        }
        if let Err(e) = utils::sleep(&self.window, self.config.refresh_delay_ms).await {
            console_errorf!("Couldn't schedule a refresh {:?}", e);
            return;
        }

        match self.config.after_remove {
            AfterRemove::ReloadPage => {
                if let Err(e) = self.window.location().reload() {
                    console_errorf!("Couldn't reload the page {:?}", e);
                }
            }
            AfterRemove::Rerender => {
                if let Ok(players) = self.roster.refresh().await {
                    let result = if players.is_empty() {
                        self.view.borrow_mut().clear();
                        Ok(false)
                    } else {
                        self.render(&players)
                    };
                    if let Err(e) = result {
                        console_errorf!("Uh oh, trouble rendering players! {:?}", e);
                    }
                }
            }
        }
    }
}

/// Wires the app up against the live page and the real API.
pub async fn boot(config: AppConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_js_err_with_msg("no global window")?;
    let document = window.document().ok_or_js_err_with_msg("window has no document")?;
    let container = document
        .get_element_by_id(PLAYERS_CONTAINER_ID)
        .ok_or_js_err_with_msg("missing #all-players-container")?;

    let api = PlayerApi::new(config.api.clone(), BrowserFetch::new(window.clone()));
    let app = App::new(Roster::new(api), RosterView::new(container), window, config)?;
    app.run().await
}

pub fn config_for(cohort: &str, reload_page_on_remove: bool) -> Result<AppConfig, JsValue> {
    let api = ApiConfig::for_cohort(cohort).ok_or_js_err()?;
    let mut config = AppConfig::new(api);
    if reload_page_on_remove {
        config.after_remove = AfterRemove::ReloadPage;
    }
    Ok(config)
}
