//! Elm-style update function for the dashboard card: takes the current
//! state and a message, mutates the state, and reports whether the view
//! must re-render.

use gloo_console::error;
use yew::prelude::*;

use super::domain::Dashboard;
use super::helpers::show_toast;
use super::messages::Msg;
use super::state::DashboardCard;

pub fn update<D: Dashboard>(
    component: &mut DashboardCard<D>,
    _ctx: &Context<DashboardCard<D>>,
    msg: Msg<D>,
) -> bool {
    match msg {
        Msg::SourcesLoaded(sources) => {
            component.sources = Some(sources);
            component.error = None;
            component.rebuild_rows();
            true
        }
        Msg::CatalogLoaded(catalog) => {
            component.catalog = Some(catalog);
            component.rebuild_rows();
            true
        }
        Msg::FetchFailed(message) => {
            error!("dashboard fetch failed:", message.clone());
            show_toast(&format!("Could not load {}: {}", D::TITLE, message));
            component.error = Some(message);
            true
        }
        Msg::ToggleSort(column) => {
            component.query.toggle_sort(column);
            true
        }
        Msg::ToggleName(name) => {
            component.query.toggle_name(name);
            true
        }
        Msg::ClearNames => {
            component.query.clear_names();
            true
        }
        Msg::SetPage(page_index) => {
            component.query.set_page(page_index);
            true
        }
        Msg::SetPageSize(page_size) => {
            component.query.set_page_size(page_size);
            true
        }
    }
}
