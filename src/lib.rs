extern crate cfg_if;
extern crate wasm_bindgen;

pub mod api;
pub mod app;
pub mod config;
pub mod extensions;
pub mod fetch;
pub mod form;
pub mod models;
pub mod render;
pub mod roster;
mod templates;
pub mod utils;

use cfg_if::cfg_if;
use handlebars::Handlebars;
use js_sys::Promise;
use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise as ftp;

cfg_if! {
    // When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
    // allocator.
    if #[cfg(feature = "wee_alloc")] {
        extern crate wee_alloc;
        #[global_allocator]
        static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
    }
}

static PLAYER_CARD_PARTIAL_TEMPLATE: &'static str = "PLAYER_CARD_PARTIAL";
static PLAYER_LIST_TEMPLATE: &'static str = "PLAYER_LIST";
static NEW_PLAYER_FORM_TEMPLATE: &'static str = "NEW_PLAYER_FORM";

lazy_static! {
    static ref HBARS: Handlebars<'static> = {
        let mut reg = Handlebars::new();

        assert!(reg
            .register_partial(
                PLAYER_CARD_PARTIAL_TEMPLATE,
                templates::player_card::PLAYER_CARD_PARTIAL
            )
            .is_ok());
        assert!(reg
            .register_template_string(PLAYER_LIST_TEMPLATE, templates::player_list::PLAYER_LIST)
            .is_ok());
        assert!(reg
            .register_template_string(
                NEW_PLAYER_FORM_TEMPLATE,
                templates::new_player_form::NEW_PLAYER_FORM
            )
            .is_ok());

        reg
    };
}

fn launch(config: Result<config::AppConfig, JsValue>) -> Promise {
    utils::set_panic_hook();
    ftp(async move {
        let result = match config {
            Ok(config) => app::boot(config).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            console_errorf!("Uh oh, something went wrong in init! {:?}", e);
        }
        Ok(JsValue::UNDEFINED)
    })
}

/// Loads the roster for the default cohort into the page.
#[wasm_bindgen]
pub fn start() -> Promise {
    launch(app::config_for(config::DEFAULT_COHORT, false))
}

/// Like `start`, for another cohort. With `reload_page_on_remove` set, a
/// confirmed removal reloads the whole page instead of re-rendering the list.
#[wasm_bindgen]
pub fn start_with_config(cohort: &str, reload_page_on_remove: bool) -> Promise {
    launch(app::config_for(cohort, reload_page_on_remove))
}
