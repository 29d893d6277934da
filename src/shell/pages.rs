// Start of file: /src/shell/pages.rs

/*
    * Server-rendered page components mounted by the route table, plus the
    * not-found and error views.
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use uuid::Uuid;

use crate::models::{Case, Client};

const APP_TITLE: &str = "Legal Case Management";

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; background: #f5f7fa; }
header { background: #243b53; color: #fff; padding: 1rem 2rem; }
header a { color: inherit; text-decoration: none; }
main { max-width: 72rem; margin: 2rem auto; padding: 0 2rem; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { text-align: left; padding: .6rem .8rem; border-bottom: 1px solid #d9e2ec; }
th { font-weight: 600; background: #f0f4f8; }
.empty { padding: 3rem; text-align: center; color: #627d98; }
.status { font-size: .85rem; padding: .1rem .5rem; border-radius: .25rem; background: #e4e7eb; }
"#;

/// Base document shared by every page. `page` is exposed as `data-page` on `<main>`.
fn layout(title: &str, page: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (APP_TITLE) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    a href="/" { strong { (APP_TITLE) } }
                }
                main data-page=(page) {
                    (content)
                }
            }
        }
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default()
}

/// Every case with the name of its client, or an empty-state message.
pub fn case_list_page(cases: &[Case], clients: &[Client]) -> Markup {
    let client_names: HashMap<Uuid, &str> = clients
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    layout(
        "Cases",
        "CaseListPage",
        html! {
            h1 { "Cases" }
            @if cases.is_empty() {
                div class="empty" {
                    p { "No cases yet." }
                }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Case" }
                            th { "Number" }
                            th { "Client" }
                            th { "Status" }
                            th { "Court date" }
                            th { "Assigned lawyer" }
                        }
                    }
                    tbody {
                        @for case in cases {
                            tr data-case-id=(case.id.to_string()) {
                                td { (case.case_name) }
                                td { (case.case_number.as_deref().unwrap_or("")) }
                                td { (client_names.get(&case.client_id).copied().unwrap_or("Unknown client")) }
                                td {
                                    @if let Some(status) = &case.status {
                                        span class="status" { (status) }
                                    }
                                }
                                td { (format_date(case.court_date)) }
                                td { (case.assigned_lawyer.as_deref().unwrap_or("")) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(path: &str) -> Markup {
    layout(
        "Page not found",
        "NotFoundPage",
        html! {
            h1 { "Page not found" }
            p { "Nothing is mounted at " code { (path) } "." }
            p { a href="/" { "Back to cases" } }
        },
    )
}

pub fn error_page() -> Markup {
    layout(
        "Something went wrong",
        "ErrorPage",
        html! {
            h1 { "Something went wrong" }
            p { "The page could not be loaded. Please try again later." }
        },
    )
}


// End of file: /src/shell/pages.rs
