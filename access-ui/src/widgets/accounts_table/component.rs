use crate::widgets::empty_state::EmptyState;
use access::{ACCOUNT_COLUMNS, AccountRow, ColumnKind, SortDirection};
use application::FetchState;
use dioxus::prelude::*;

#[component]
pub fn AccountsTable(
    state: FetchState,
    sort: Option<SortDirection>,
    on_sort: EventHandler<()>,
    on_request: EventHandler<AccountRow>,
) -> Element {
    match state {
        FetchState::Idle | FetchState::Loading => rsx! {
            div { class: "table-status",
                span { class: "status-dot loading" }
                span { "Loading accounts..." }
            }
        },
        FetchState::Failed(message) => rsx! {
            EmptyState {
                icon: "⚠️".to_string(),
                title: "Accounts could not be loaded".to_string(),
                description: message,
            }
        },
        FetchState::Loaded(rows) if rows.is_empty() => rsx! {
            EmptyState {
                icon: "🔍".to_string(),
                title: "No accounts found".to_string(),
                description: "Try a different search term or record type.".to_string(),
            }
        },
        FetchState::Loaded(rows) => rsx! {
            table { class: "accounts-table",
                thead {
                    tr {
                        for column in ACCOUNT_COLUMNS {
                            th {
                                class: if column.sortable { "sortable" } else { "" },
                                onclick: move |_| {
                                    if column.sortable {
                                        on_sort.call(());
                                    }
                                },
                                "{column.label}"
                                if column.sortable {
                                    span { class: "sort-arrow",
                                        {sort.map(SortDirection::arrow).unwrap_or("↕")}
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            for column in ACCOUNT_COLUMNS {
                                match column.kind {
                                    ColumnKind::Field(field) => rsx! {
                                        td { "{row.field(field)}" }
                                    },
                                    ColumnKind::Action { label, .. } => {
                                        let row = row.clone();
                                        rsx! {
                                            td { class: column.class.unwrap_or_default(),
                                                button {
                                                    class: "link-button",
                                                    r#type: "button",
                                                    onclick: move |_| on_request.call(row.clone()),
                                                    "{label}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
