use std::collections::HashSet;

use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{
    parse_count, AppError, StayDraft, StayErrors, StayField, StayRequest, StayRule, STAY_FIELDS,
};
use shared_ui::{use_toast, Button, ButtonVariant, Card, DateField, Form, FormField, Input, ToastOptions};

use crate::dates::{to_naive, to_picker, today};

/// The error to display for `field`, if the user has reached it yet.
fn shown_error(
    draft: &StayDraft,
    touched: &HashSet<StayField>,
    submitted: bool,
    field: StayField,
    today: NaiveDate,
) -> Option<StayRule> {
    if submitted || touched.contains(&field) {
        draft.validate_field(field, today)
    } else {
        None
    }
}

/// Last date the check-out calendar refuses: the check-in day, or
/// yesterday while no check-in is picked.
fn check_out_floor(check_in: Option<NaiveDate>, today: NaiveDate) -> Option<NaiveDate> {
    check_in.or_else(|| today.pred_opt())
}

/// Toast text for a rejected submit. Field messages are shown inline.
fn rejection_notice(errors: StayErrors) -> String {
    AppError::from(errors).friendly_message()
}

/// Check-in/check-out/guests/rooms search form.
///
/// `on_search` only fires once every rule passes.
#[component]
pub fn StaySearchForm(headline: String, on_search: EventHandler<StayRequest>) -> Element {
    let mut draft = use_signal(StayDraft::default);
    let mut guests_text = use_signal(|| draft.peek().guests.to_string());
    let mut rooms_text = use_signal(|| draft.peek().rooms.to_string());
    let mut touched = use_signal(HashSet::<StayField>::new);
    let mut submitted = use_signal(|| false);
    let toast = use_toast();

    let mut mark_edited = move |field: StayField| {
        touched.write().insert(field);
    };

    let errors = use_memo(move || {
        let today = today();
        let draft = draft.read();
        let touched = touched.read();
        STAY_FIELDS
            .iter()
            .map(|&field| shown_error(&draft, &touched, submitted(), field, today))
            .collect::<Vec<_>>()
    });
    let message = move |field: StayField| -> Option<String> {
        let index = STAY_FIELDS.iter().position(|f| *f == field)?;
        errors.read()[index].map(|rule| rule.message().to_string())
    };

    let handle_submit = move |_: FormEvent| {
        submitted.set(true);
        match draft.peek().validate(today()) {
            Ok(request) => {
                tracing::info!(
                    check_in = %request.check_in,
                    check_out = %request.check_out,
                    guests = request.guests,
                    rooms = request.rooms,
                    "stay search submitted"
                );
                on_search.call(request);
            }
            Err(errors) => {
                tracing::warn!(errors = %errors, "stay search rejected");
                toast.error(rejection_notice(errors), ToastOptions::new());
            }
        }
    };

    let check_in = draft.read().check_in.and_then(to_picker);
    let check_out = draft.read().check_out.and_then(to_picker);
    let check_out_disabled = check_out_floor(draft.read().check_in, today()).and_then(to_picker);

    rsx! {
        Card { class: "stay-search", title: headline,
            Form { onsubmit: handle_submit,
                FormField {
                    label: StayField::CheckIn.label().to_string(),
                    html_for: StayField::CheckIn.key().to_string(),
                    error: message(StayField::CheckIn),
                    DateField {
                        id: StayField::CheckIn.key().to_string(),
                        value: check_in,
                        on_change: move |date: Option<_>| {
                            draft.write().check_in = date.and_then(to_naive);
                            mark_edited(StayField::CheckIn);
                        },
                    }
                }
                FormField {
                    label: StayField::CheckOut.label().to_string(),
                    html_for: StayField::CheckOut.key().to_string(),
                    error: message(StayField::CheckOut),
                    DateField {
                        id: StayField::CheckOut.key().to_string(),
                        value: check_out,
                        disabled_through: check_out_disabled,
                        on_change: move |date: Option<_>| {
                            draft.write().check_out = date.and_then(to_naive);
                            mark_edited(StayField::CheckOut);
                        },
                    }
                }
                div { class: "form-row",
                    FormField {
                        label: StayField::Guests.label().to_string(),
                        html_for: StayField::Guests.key().to_string(),
                        error: message(StayField::Guests),
                        Input {
                            id: StayField::Guests.key(),
                            input_type: "number",
                            min: "1".to_string(),
                            value: guests_text(),
                            invalid: message(StayField::Guests).is_some(),
                            on_input: move |evt: FormEvent| {
                                let text = evt.value();
                                draft.write().guests = parse_count(&text);
                                guests_text.set(text);
                                mark_edited(StayField::Guests);
                            },
                        }
                    }
                    FormField {
                        label: StayField::Rooms.label().to_string(),
                        html_for: StayField::Rooms.key().to_string(),
                        error: message(StayField::Rooms),
                        Input {
                            id: StayField::Rooms.key(),
                            input_type: "number",
                            min: "1".to_string(),
                            value: rooms_text(),
                            invalid: message(StayField::Rooms).is_some(),
                            on_input: move |evt: FormEvent| {
                                let text = evt.value();
                                draft.write().rooms = parse_count(&text);
                                rooms_text.set(text);
                                mark_edited(StayField::Rooms);
                            },
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit",
                    full_width: true,
                    "Search"
                }
            }
        }
    }
}
