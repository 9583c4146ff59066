use crate::extensions::*;
use crate::models::NewPlayer;
use crate::{console_errorf, console_logf, HBARS, NEW_PLAYER_FORM_TEMPLATE};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement};

pub static ADD_PLAYER_FORM_ID: &str = "add-player-form";
pub static NEW_PLAYER_FORM_CONTAINER_ID: &str = "new-player-form";

pub static NAME_FIELD_ID: &str = "name";
pub static BREED_FIELD_ID: &str = "breed";
pub static STATUS_FIELD_ID: &str = "status";
pub static IMAGE_URL_FIELD_ID: &str = "imageUrl";

/// Values the API accepts for a player's status.
pub static STATUSES: [&str; 2] = ["bench", "field"];

/// Puts the default add-player form into `#new-player-form`, unless the page
/// already ships its own `#add-player-form`.
pub fn render_new_player_form(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ADD_PLAYER_FORM_ID).is_some() {
        return Ok(());
    }
    let container = match document.get_element_by_id(NEW_PLAYER_FORM_CONTAINER_ID) {
        Some(el) => el,
        None => {
            console_logf!(
                "No #{} on the page, not rendering a form",
                NEW_PLAYER_FORM_CONTAINER_ID
            );
            return Ok(());
        }
    };

    #[derive(Serialize)]
    struct Data {
        form_id: &'static str,
        statuses: &'static [&'static str],
    }
    let data = Data {
        form_id: ADD_PLAYER_FORM_ID,
        statuses: &STATUSES,
    };
    let html = HBARS.render(NEW_PLAYER_FORM_TEMPLATE, &data).ok_or_js_err()?;
    container.set_inner_html(&html);
    Ok(())
}

fn field_value(document: &Document, id: &str) -> Result<String, JsValue> {
    let el = document
        .get_element_by_id(id)
        .ok_or_js_err_with_msg(&format!("missing form field #{}", id))?;
    let el = match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(input.value()),
        Err(el) => el,
    };
    match el.dyn_into::<HtmlSelectElement>() {
        Ok(select) => Ok(select.value()),
        Err(_) => Err(JsValue::from_str(&format!(
            "form field #{} is not an input or select",
            id
        ))),
    }
}

/// Reads the four form fields as they are. Validation is the server's job.
pub fn read_new_player(document: &Document) -> Result<NewPlayer, JsValue> {
    Ok(NewPlayer {
        name: field_value(document, NAME_FIELD_ID)?,
        breed: field_value(document, BREED_FIELD_ID)?,
        status: field_value(document, STATUS_FIELD_ID)?,
        image_url: field_value(document, IMAGE_URL_FIELD_ID)?,
    })
}

/// Intercepts the form's submit event and hands the entered player to
/// `on_submit`. The listener lives as long as the page does.
pub fn bind_submit<H>(form: &Element, document: Document, on_submit: H) -> Result<(), JsValue>
where
    H: Fn(NewPlayer) + 'static,
{
    let listener = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        match read_new_player(&document) {
            Ok(new_player) => on_submit(new_player),
            Err(e) => console_errorf!("Error while reading the new player form {:?}", e),
        }
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
