//! View rendering for the dashboard card: filter chips, the sortable
//! table, blank-row padding, and the pagination controls.

use common::pipeline::{SortDirection, TableView, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::domain::Dashboard;
use super::messages::Msg;
use super::state::DashboardCard;

pub fn view<D: Dashboard>(component: &DashboardCard<D>, ctx: &Context<DashboardCard<D>>) -> Html {
    let link = ctx.link();

    html! {
        <section class="dashboard-card">
            <h2>{ D::TITLE }</h2>
            { build_error_banner(component) }
            { build_filter_bar(component, link) }
            {
                if component.is_loading() {
                    html! { <div class="loading">{ "Loading…" }</div> }
                } else {
                    let table = component.query.apply(&component.base_rows);
                    html! {
                        <>
                            { build_table(component, link, &table) }
                            { build_pagination(component, link, &table) }
                        </>
                    }
                }
            }
        </section>
    }
}

fn build_error_banner<D: Dashboard>(component: &DashboardCard<D>) -> Html {
    match &component.error {
        Some(error) => html! {
            <div class="error-banner">{ format!("Failed to load data: {error}") }</div>
        },
        None => html! {},
    }
}

/// One chip per catalog name plus the "All" chip. An empty selection is
/// the "All" state; names are toggled in and out of the selection.
fn build_filter_bar<D: Dashboard>(
    component: &DashboardCard<D>,
    link: &Scope<DashboardCard<D>>,
) -> Html {
    let options = component.filter_options();
    if options.is_empty() {
        return html! {};
    }
    let all_active = component.query.selected_names.is_empty();

    html! {
        <div class="filter-bar">
            <button
                class={classes!("filter-chip", all_active.then_some("active"))}
                onclick={link.callback(|_| Msg::ClearNames)}
            >
                { "All" }
            </button>
            {
                options.into_iter().map(|name| {
                    let active = component.query.selected_names.contains(&name);
                    let toggled = name.clone();
                    html! {
                        <button
                            class={classes!("filter-chip", active.then_some("active"))}
                            onclick={link.callback(move |_| Msg::ToggleName(toggled.clone()))}
                        >
                            { name }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

fn build_table<D: Dashboard>(
    component: &DashboardCard<D>,
    link: &Scope<DashboardCard<D>>,
    table: &TableView<D::Item>,
) -> Html {
    let headers = D::COLUMNS
        .iter()
        .map(|&column| {
            let indicator = match component.query.sort {
                Some(spec) if spec.column == column => match spec.direction {
                    SortDirection::Asc => " ▲",
                    SortDirection::Desc => " ▼",
                },
                _ => "",
            };
            html! {
                <th onclick={link.callback(move |_| Msg::ToggleSort(column))}>
                    { D::column_label(column) }{ indicator }
                </th>
            }
        })
        .collect::<Html>();

    let body = table
        .rows
        .iter()
        .map(|row| {
            html! {
                <tr>
                    {
                        D::COLUMNS.iter()
                            .map(|&column| html! { <td>{ D::cell(row, column) }</td> })
                            .collect::<Html>()
                    }
                </tr>
            }
        })
        .collect::<Html>();

    // Padding rows keep later pages at full height; see the paginator.
    let blanks = (0..table.blank_rows)
        .map(|_| {
            html! {
                <tr class="blank-row">
                    {
                        D::COLUMNS.iter()
                            .map(|_| html! { <td>{ "\u{a0}" }</td> })
                            .collect::<Html>()
                    }
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <table class="dashboard-table">
            <thead><tr>{ headers }</tr></thead>
            <tbody>
                {
                    if table.total_rows == 0 {
                        html! {
                            <tr class="empty-row">
                                <td colspan={D::COLUMNS.len().to_string()}>{ "Nothing to show" }</td>
                            </tr>
                        }
                    } else {
                        html! { <>{ body }{ blanks }</> }
                    }
                }
            </tbody>
        </table>
    }
}

fn build_pagination<D: Dashboard>(
    component: &DashboardCard<D>,
    link: &Scope<DashboardCard<D>>,
    table: &TableView<D::Item>,
) -> Html {
    let page_index = component.query.page_index;
    let page_size = component.query.page_size;
    let page_count = table.total_rows.div_ceil(page_size).max(1);

    let on_page_size = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetPageSize(value.parse().unwrap_or(DEFAULT_PAGE_SIZE))
    });

    let prev = page_index.saturating_sub(1);
    let next = (page_index + 1).min(page_count - 1);

    html! {
        <div class="pagination">
            <label>
                { "Rows per page " }
                <select onchange={on_page_size}>
                    {
                        PAGE_SIZE_OPTIONS.into_iter().map(|size| html! {
                            <option value={size.to_string()} selected={size == page_size}>
                                { size }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <span class="page-label">
                { format!("Page {} of {page_count} ({} rows)", page_index + 1, table.total_rows) }
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
    }
}
