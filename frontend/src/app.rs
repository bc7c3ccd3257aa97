//! Application shell: a tab bar over the four dashboard cards plus the
//! shared time-horizon selector. The selected horizon is passed down as a
//! prop; each card refetches when it changes.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::birthdays::BirthdaysCard;
use crate::components::dashboard::{
    AwardsDashboard, DashboardCard, DocumentsDashboard, TrainingDashboard,
};

/// Horizons (in days) offered by the selector.
const HORIZON_OPTIONS: [u32; 4] = [7, 30, 60, 90];
const DEFAULT_HORIZON: u32 = 30;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Awards,
    Training,
    Documents,
    Birthdays,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Awards => "Awards",
            Tab::Training => "Training",
            Tab::Documents => "Documents",
            Tab::Birthdays => "Birthdays",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
    SetDays(u32),
}

pub struct App {
    tab: Tab,
    days: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Awards,
            days: DEFAULT_HORIZON,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::SetDays(days) => {
                self.days = days;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let tabs = [Tab::Awards, Tab::Training, Tab::Documents, Tab::Birthdays]
            .into_iter()
            .map(|tab| {
                let active = if tab == self.tab { "active" } else { "" };
                html! {
                    <button
                        class={classes!("tab-btn", active)}
                        onclick={link.callback(move |_| Msg::SetTab(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            })
            .collect::<Html>();

        let on_days_change = link.callback(|e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            Msg::SetDays(value.parse().unwrap_or(DEFAULT_HORIZON))
        });

        html! {
            <div class="console-root">
                <header class="console-header">
                    <h1>{ "Volunteer Console" }</h1>
                    <div class="tab-bar">{ tabs }</div>
                    <label class="horizon-select">
                        { "Within " }
                        <select onchange={on_days_change}>
                            {
                                HORIZON_OPTIONS.into_iter().map(|days| html! {
                                    <option value={days.to_string()} selected={days == self.days}>
                                        { format!("{days} days") }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                </header>

                {
                    match self.tab {
                        Tab::Awards => html! { <DashboardCard<AwardsDashboard> days={self.days} /> },
                        Tab::Training => html! { <DashboardCard<TrainingDashboard> days={self.days} /> },
                        Tab::Documents => html! { <DashboardCard<DocumentsDashboard> days={self.days} /> },
                        Tab::Birthdays => html! { <BirthdaysCard days={self.days} /> },
                    }
                }
            </div>
        }
    }
}
