//! Debug control panel: Colors, Bloom and Music folders built from plain DOM
//! elements. Every control writes straight into [`AppState`] on change.

use crate::audio::AudioPlayer;
use crate::constants::{PANEL_ID, PANEL_STATUS_ID};
use crate::core::{AppState, PanelFolder, ParamKey};
use crate::dom;
use crate::loader;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PanelWiring {
    pub state: Rc<RefCell<AppState>>,
    pub player: Rc<RefCell<AudioPlayer>>,
}

pub fn build(document: &web::Document, w: &PanelWiring) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let panel = dom::element(document, "div", None)?;
    panel.set_id(PANEL_ID);

    for folder in [PanelFolder::Colors, PanelFolder::Bloom] {
        let section = folder_section(document, &panel, folder)?;
        for key in ParamKey::ALL.into_iter().filter(|k| k.folder() == folder) {
            slider_row(document, &section, key, w)?;
        }
    }
    let music = folder_section(document, &panel, PanelFolder::Music)?;
    track_select(document, &music, w)?;

    let status = dom::element(document, "div", None)?;
    status.set_id(PANEL_STATUS_ID);
    dom::append(&panel, &status)?;

    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("append panel: {:?}", e))?;
    log::info!("[panel] built");
    Ok(())
}

fn folder_section(
    document: &web::Document,
    panel: &web::Element,
    folder: PanelFolder,
) -> anyhow::Result<web::Element> {
    let details = dom::element(document, "details", None)?;
    _ = details.set_attribute("open", "");
    let summary = dom::element(document, "summary", Some(folder.title()))?;
    dom::append(&details, &summary)?;
    dom::append(panel, &details)?;
    Ok(details)
}

fn slider_row(
    document: &web::Document,
    section: &web::Element,
    key: ParamKey,
    w: &PanelWiring,
) -> anyhow::Result<()> {
    let row = dom::element(document, "div", None)?;
    row.set_class_name("panel-row");
    let label = dom::element(document, "label", Some(key.label()))?;
    let input: web::HtmlInputElement = dom::element(document, "input", None)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("input element: {:?}", e))?;
    let (lo, hi) = key.range();
    let value = w.state.borrow().params.get(key);
    input.set_type("range");
    input.set_min(&lo.to_string());
    input.set_max(&hi.to_string());
    input.set_step("0.01");
    input.set_value(&value.to_string());
    let readout = dom::element(document, "span", Some(&format!("{:.2}", value)))?;
    dom::append(&row, &label)?;
    dom::append(&row, &input)?;
    dom::append(&row, &readout)?;
    dom::append(section, &row)?;

    let state = w.state.clone();
    let source = input.clone();
    dom::listen(&input, "input", move |_: web::Event| {
        let raw = source.value_as_number() as f32;
        let applied = state.borrow_mut().set_param(key, raw);
        readout.set_text_content(Some(&format!("{:.2}", applied)));
    });
    Ok(())
}

fn track_select(
    document: &web::Document,
    section: &web::Element,
    w: &PanelWiring,
) -> anyhow::Result<()> {
    let row = dom::element(document, "div", None)?;
    row.set_class_name("panel-row");
    let label = dom::element(document, "label", Some("ChangeMusic"))?;
    let select: web::HtmlSelectElement = dom::element(document, "select", None)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("select element: {:?}", e))?;
    let labels: Vec<&'static str> = w.state.borrow().catalog.labels().collect();
    for track_label in labels {
        let option = dom::element(document, "option", Some(track_label))?;
        _ = option.set_attribute("value", track_label);
        dom::append(&select, &option)?;
    }
    dom::append(&row, &label)?;
    dom::append(&row, &select)?;
    dom::append(section, &row)?;

    let w = w.clone();
    let source = select.clone();
    dom::listen(&select, "change", move |_: web::Event| {
        loader::request_track(&source.value(), &w.state, &w.player);
    });
    Ok(())
}

pub fn set_status(text: &str) {
    if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(PANEL_STATUS_ID)) {
        el.set_text_content(Some(text));
    }
}

pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let cl = el.class_list();
        if is_hidden(document) {
            _ = cl.remove_1("hidden");
        } else {
            _ = cl.add_1("hidden");
        }
    }
}

/// True when the event originated inside the panel.
pub fn contains_event_target(ev: &web::Event) -> bool {
    let Some(node) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return false;
    };
    dom::window_document()
        .and_then(|d| d.get_element_by_id(PANEL_ID))
        .map(|panel| panel.contains(Some(&node)))
        .unwrap_or(false)
}
