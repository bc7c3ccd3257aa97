//! Generic upcoming/outstanding dashboard card.
//!
//! One `Component` implementation serves the awards, training, and
//! documents views; a view plugs in via the [`Dashboard`] trait. On first
//! render the card fires two independent requests, one for the grouped
//! data and one for the catalog backing the filter options, and only
//! flattens once both have answered. A horizon change from the app shell
//! refetches the data while the catalog stays as it is.

use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod domain;
pub(crate) mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use domain::{AwardsDashboard, Dashboard, DocumentsDashboard, TrainingDashboard};
pub use messages::Msg;
pub use props::DashboardProps;
pub use state::DashboardCard;

impl<D: Dashboard> Component for DashboardCard<D> {
    type Message = Msg<D>;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardCard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().days != old_props.days {
            self.sources = None;
            self.base_rows.clear();
            self.error = None;
            fetch_sources(ctx.link().clone(), ctx.props().days);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_sources(ctx.link().clone(), ctx.props().days);
            fetch_catalog(ctx.link().clone());
        }
    }
}

fn fetch_sources<D: Dashboard>(link: Scope<DashboardCard<D>>, days: u32) {
    spawn_local(async move {
        match Request::get(&D::data_url(days)).send().await {
            Ok(resp) if resp.status() == 200 => match resp.json::<Vec<D::Source>>().await {
                Ok(sources) => link.send_message(Msg::SourcesLoaded(sources)),
                Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
            },
            Ok(resp) => link.send_message(Msg::FetchFailed(format!("HTTP {}", resp.status()))),
            Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
        }
    });
}

fn fetch_catalog<D: Dashboard>(link: Scope<DashboardCard<D>>) {
    spawn_local(async move {
        match Request::get(D::catalog_url()).send().await {
            Ok(resp) if resp.status() == 200 => match resp.json::<Vec<D::Catalog>>().await {
                Ok(catalog) => link.send_message(Msg::CatalogLoaded(catalog)),
                Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
            },
            Ok(resp) => link.send_message(Msg::FetchFailed(format!("HTTP {}", resp.status()))),
            Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
        }
    });
}
