use std::sync::Arc;
use std::time::Duration;

use access::{Notification, RecordType, Severity};
use application::{AccessRequestForm, AccountQuery, Application};
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use strum::IntoEnumIterator;

use crate::config::Config;
use crate::widgets::accounts_table::AccountsTable;
use crate::widgets::request_form::RequestForm;

/// Runs `query` against the account directory and feeds the result back.
/// Superseded queries are dropped by the form when they land.
fn run_query(mut form: Signal<AccessRequestForm>, query: AccountQuery) {
    let app = consume_context::<Application>();
    spawn(async move {
        let result = app.search.exec(&query.criteria).await;
        form.write().apply_accounts(query.ticket, result);
    });
}

#[component]
pub fn RequestClientAccess() -> Element {
    let config = use_context::<Config>();
    let toaster = use_toast();

    let mut form = use_signal(move || {
        let notifier = move |notification: Notification| {
            info!("{}: {}", notification.title, notification.message);
            match notification.severity {
                Severity::Success => {
                    let options = ToastOptions::new()
                        .duration(Duration::from_secs(3))
                        .permanent(false);
                    toaster.success(notification.message, options);
                }
                Severity::Error => {
                    toaster.error(notification.message, ToastOptions::new().permanent(true));
                }
            }
        };
        AccessRequestForm::new(Arc::new(notifier))
    });

    // Initial load: empty term, no type filter
    use_effect(move || {
        let query = form.write().refresh();
        run_query(form, query);
    });

    let state = form.read().fetch_state().clone();
    let sort = form.read().sort();
    let search_term = form.read().criteria().search_term.clone();
    let selected_type = form.read().criteria().record_type_name();
    let selected = {
        let form = form.read();
        form.visibility()
            .is_visible()
            .then(|| form.selected_account().cloned())
            .flatten()
    };
    let draft = form.read().draft().clone();
    let submitting = form.read().is_submitting();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Request Client Access" }
            }

            div { class: "search-controls",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search accounts...",
                    value: "{search_term}",
                    oninput: move |e: Event<FormData>| {
                        let query = form.write().on_search_term_change(e.value());
                        run_query(form, query);
                    },
                }
                select {
                    class: "type-select",
                    value: "{selected_type}",
                    onchange: move |e: Event<FormData>| {
                        let record_type = e.value().parse::<RecordType>().ok();
                        let query = form.write().on_record_type_change(record_type);
                        run_query(form, query);
                    },
                    option { value: "", "All record types" }
                    for record_type in RecordType::iter() {
                        option { value: "{record_type}", {record_type.label()} }
                    }
                }
            }

            AccountsTable {
                state,
                sort,
                on_sort: move |_| form.write().on_sort(),
                on_request: move |row| form.write().on_row_action(row),
            }

            if let Some(account) = selected {
                RequestForm {
                    account,
                    draft,
                    requester: config.requester_name.clone(),
                    submitting,
                    on_change: move |field| form.write().on_field_change(field),
                    on_cancel: move |_| form.write().on_cancel(),
                    on_submit: move |_| {
                        let request = form.write().begin_submit();
                        if let Ok(request) = request {
                            let app = consume_context::<Application>();
                            spawn(async move {
                                let result = app.submit.exec(request).await;
                                // Failures are already logged and surfaced as a toast
                                form.write().finish_submit(result).ok();
                            });
                        }
                    },
                }
            }
        }
    }
}
