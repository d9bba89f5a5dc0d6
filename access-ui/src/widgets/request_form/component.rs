use access::{AccessRequestDraft, AccountRow, DraftField, parse_date_input};
use dioxus::prelude::*;

#[component]
pub fn RequestForm(
    account: AccountRow,
    draft: AccessRequestDraft,
    requester: String,
    submitting: bool,
    on_change: EventHandler<DraftField>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let start_date = draft.start_date.map(|d| d.to_string()).unwrap_or_default();
    let end_date = draft.end_date.map(|d| d.to_string()).unwrap_or_default();
    let client_code = account.account_number.clone().unwrap_or_default();

    rsx! {
        div { class: "request-card",
            div { class: "request-summary",
                h2 { "Request access to {account.name}" }
                if !client_code.is_empty() {
                    p { class: "client-code", "Client Code: {client_code}" }
                }
                p { class: "requester", "Requested by {requester}" }
            }

            form { class: "request-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    on_submit.call(());
                },

                div { class: "form-group",
                    label { r#for: "start-date",
                        {DraftField::START_DATE}
                        span { class: "required", "*" }
                    }
                    input {
                        id: "start-date",
                        r#type: "date",
                        required: true,
                        value: "{start_date}",
                        oninput: move |e: Event<FormData>| {
                            on_change.call(DraftField::StartDate(parse_date_input(&e.value())))
                        },
                    }
                }

                div { class: "form-group",
                    label { r#for: "end-date", {DraftField::END_DATE} }
                    input {
                        id: "end-date",
                        r#type: "date",
                        value: "{end_date}",
                        oninput: move |e: Event<FormData>| {
                            on_change.call(DraftField::EndDate(parse_date_input(&e.value())))
                        },
                    }
                }

                div { class: "checkbox-group",
                    input {
                        id: "indefinite",
                        r#type: "checkbox",
                        checked: draft.indefinite,
                        onchange: move |e: Event<FormData>| on_change.call(DraftField::Indefinite(e.checked())),
                    }
                    label { r#for: "indefinite", {DraftField::INDEFINITE} }
                }

                div { class: "form-group",
                    label { r#for: "notes", {DraftField::NOTES} }
                    textarea {
                        id: "notes",
                        rows: "3",
                        value: "{draft.notes}",
                        oninput: move |e: Event<FormData>| on_change.call(DraftField::Notes(e.value())),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "button secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Submitting..." } else { "Submit" }
                    }
                }
            }
        }
    }
}
