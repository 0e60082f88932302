use dioxus::prelude::*;
use dioxus_primitives::calendar::{CalendarProps, DateRange};
use dioxus_primitives::date_picker as prim;

pub use time::{Date, Month};

#[component]
pub fn DatePicker(mut props: prim::DatePickerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "servy-date-picker", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DatePicker { ..props }
    }
}

#[component]
pub fn DatePickerPopover(mut props: prim::DatePickerPopoverProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "servy-date-picker-popover",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerPopover { ..props }
    }
}

#[component]
pub fn DatePickerCalendar(mut props: prim::DatePickerCalendarProps<CalendarProps>) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "servy-date-picker-calendar",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerCalendar { ..props }
    }
}

#[component]
pub fn DatePickerInput(mut props: prim::DatePickerInputProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "servy-date-picker-input",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerInput { ..props }
    }
}

/// Single-date field: a text input with a popover calendar.
///
/// `id` lands on the text input so a label can point at it. Dates on or
/// before `disabled_through` cannot be picked.
#[component]
pub fn DateField(
    value: Option<Date>,
    on_change: EventHandler<Option<Date>>,
    #[props(default)] id: Option<String>,
    #[props(default)] disabled_through: Option<Date>,
) -> Element {
    let disabled_ranges: Vec<DateRange> = disabled_through
        .map(|last| DateRange::new(Date::MIN, last))
        .into_iter()
        .collect();

    rsx! {
        DatePicker {
            selected_date: value,
            disabled_ranges,
            on_value_change: move |date: Option<Date>| on_change.call(date),
            DatePickerInput { id: id }
            DatePickerPopover {
                DatePickerCalendar {}
            }
        }
    }
}
