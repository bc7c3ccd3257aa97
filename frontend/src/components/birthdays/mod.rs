//! Upcoming birthdays card.
//!
//! The smallest of the dashboard views: no catalog and no name filter, so
//! it composes the flatten, sort, and paginate stages directly instead of
//! going through the generic card.

use gloo_console::error;
use gloo_net::http::Request;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::upcoming::{BirthdayItem, BirthdaysByVolunteer};
use common::pipeline::{
    flatten, paginate, sort_rows, trailing_blank_rows, Row, SortColumn, SortDirection, SortValue,
    TableQuery, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};

use super::dashboard::helpers::show_toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayColumn {
    Volunteer,
    Date,
    Turns,
}

impl BirthdayColumn {
    const ALL: [BirthdayColumn; 3] = [
        BirthdayColumn::Volunteer,
        BirthdayColumn::Date,
        BirthdayColumn::Turns,
    ];

    fn label(self) -> &'static str {
        match self {
            BirthdayColumn::Volunteer => "Volunteer",
            BirthdayColumn::Date => "Birthday",
            BirthdayColumn::Turns => "Turns",
        }
    }

    fn cell(self, row: &Row<BirthdayItem>) -> String {
        match self {
            BirthdayColumn::Volunteer => row.volunteer.name.clone(),
            BirthdayColumn::Date => row.item.date.format("%Y-%m-%d").to_string(),
            BirthdayColumn::Turns => match row.item.turns {
                Some(turns) => turns.to_string(),
                None => "-".to_string(),
            },
        }
    }
}

impl SortColumn<BirthdayItem> for BirthdayColumn {
    fn key<'r>(&self, row: &'r Row<BirthdayItem>) -> Option<SortValue<'r>> {
        match self {
            BirthdayColumn::Volunteer => Some(SortValue::Text(&row.volunteer.name)),
            BirthdayColumn::Date => Some(SortValue::Date(row.item.date)),
            BirthdayColumn::Turns => row.item.turns.map(|turns| SortValue::Number(turns as i64)),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BirthdaysProps {
    #[prop_or(30)]
    pub days: u32,
}

pub enum Msg {
    Loaded(Vec<BirthdaysByVolunteer>),
    FetchFailed(String),
    ToggleSort(BirthdayColumn),
    SetPage(usize),
    SetPageSize(usize),
}

pub struct BirthdaysCard {
    sources: Option<Vec<BirthdaysByVolunteer>>,
    base_rows: Vec<Row<BirthdayItem>>,
    query: TableQuery<BirthdayColumn>,
    error: Option<String>,
    loaded: bool,
}

impl Component for BirthdaysCard {
    type Message = Msg;
    type Properties = BirthdaysProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sources: None,
            base_rows: Vec::new(),
            query: TableQuery::new(DEFAULT_PAGE_SIZE),
            error: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(sources) => {
                self.base_rows = flatten(&sources);
                self.sources = Some(sources);
                self.error = None;
                self.query.reset_page();
                true
            }
            Msg::FetchFailed(message) => {
                error!("birthdays fetch failed:", message.clone());
                show_toast(&format!("Could not load birthdays: {message}"));
                self.error = Some(message);
                true
            }
            Msg::ToggleSort(column) => {
                self.query.toggle_sort(column);
                true
            }
            Msg::SetPage(page_index) => {
                self.query.set_page(page_index);
                true
            }
            Msg::SetPageSize(page_size) => {
                self.query.set_page_size(page_size);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().days != old_props.days {
            self.sources = None;
            self.base_rows.clear();
            self.error = None;
            fetch_birthdays(ctx.link().clone(), ctx.props().days);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.error.is_none() && self.sources.is_none() {
            return html! {
                <section class="dashboard-card">
                    <h2>{ "Upcoming birthdays" }</h2>
                    <div class="loading">{ "Loading…" }</div>
                </section>
            };
        }

        // No name filter here: sort and paginate straight off the base rows.
        let sorted = match &self.query.sort {
            Some(spec) => sort_rows(&self.base_rows, &spec.column, spec.direction),
            None => self.base_rows.clone(),
        };
        let total_rows = sorted.len();
        let rows = paginate(&sorted, self.query.page_index, self.query.page_size);
        let blank_rows =
            trailing_blank_rows(total_rows, self.query.page_index, self.query.page_size);
        let page_count = total_rows.div_ceil(self.query.page_size).max(1);

        let headers = BirthdayColumn::ALL
            .into_iter()
            .map(|column| {
                let indicator = match self.query.sort {
                    Some(spec) if spec.column == column => match spec.direction {
                        SortDirection::Asc => " ▲",
                        SortDirection::Desc => " ▼",
                    },
                    _ => "",
                };
                html! {
                    <th onclick={link.callback(move |_| Msg::ToggleSort(column))}>
                        { column.label() }{ indicator }
                    </th>
                }
            })
            .collect::<Html>();

        let body = rows
            .iter()
            .map(|row| {
                html! {
                    <tr>
                        {
                            BirthdayColumn::ALL.into_iter()
                                .map(|column| html! { <td>{ column.cell(row) }</td> })
                                .collect::<Html>()
                        }
                    </tr>
                }
            })
            .collect::<Html>();

        let blanks = (0..blank_rows)
            .map(|_| {
                html! {
                    <tr class="blank-row">
                        {
                            BirthdayColumn::ALL.into_iter()
                                .map(|_| html! { <td>{ "\u{a0}" }</td> })
                                .collect::<Html>()
                        }
                    </tr>
                }
            })
            .collect::<Html>();

        let on_page_size = link.callback(|e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            Msg::SetPageSize(value.parse().unwrap_or(DEFAULT_PAGE_SIZE))
        });

        let page_index = self.query.page_index;
        let prev = page_index.saturating_sub(1);
        let next = (page_index + 1).min(page_count - 1);

        html! {
            <section class="dashboard-card">
                <h2>{ "Upcoming birthdays" }</h2>
                {
                    match &self.error {
                        Some(error) => html! {
                            <div class="error-banner">{ format!("Failed to load data: {error}") }</div>
                        },
                        None => html! {},
                    }
                }
                <table class="dashboard-table">
                    <thead><tr>{ headers }</tr></thead>
                    <tbody>
                        {
                            if total_rows == 0 {
                                html! {
                                    <tr class="empty-row">
                                        <td colspan="3">{ "Nothing to show" }</td>
                                    </tr>
                                }
                            } else {
                                html! { <>{ body }{ blanks }</> }
                            }
                        }
                    </tbody>
                </table>
                <div class="pagination">
                    <label>
                        { "Rows per page " }
                        <select onchange={on_page_size}>
                            {
                                PAGE_SIZE_OPTIONS.into_iter().map(|size| html! {
                                    <option value={size.to_string()} selected={size == self.query.page_size}>
                                        { size }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <span class="page-label">
                        { format!("Page {} of {page_count} ({total_rows} rows)", page_index + 1) }
                    </span>
                    <button
                        disabled={page_index == 0}
                        onclick={link.callback(move |_| Msg::SetPage(prev))}
                    >
                        { "‹" }
                    </button>
                    <button
                        disabled={page_index + 1 >= page_count}
                        onclick={link.callback(move |_| Msg::SetPage(next))}
                    >
                        { "›" }
                    </button>
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_birthdays(ctx.link().clone(), ctx.props().days);
        }
    }
}

fn fetch_birthdays(link: Scope<BirthdaysCard>, days: u32) {
    spawn_local(async move {
        let url = format!("/api/volunteers/birthdays/upcoming/{days}");
        match Request::get(&url).send().await {
            Ok(resp) if resp.status() == 200 => {
                match resp.json::<Vec<BirthdaysByVolunteer>>().await {
                    Ok(sources) => link.send_message(Msg::Loaded(sources)),
                    Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
                }
            }
            Ok(resp) => link.send_message(Msg::FetchFailed(format!("HTTP {}", resp.status()))),
            Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
        }
    });
}
