use crate::shared::components::table::number_format::{format_money, format_number_with_decimals};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its numeric value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Integer => format_number_with_decimals(val, 0),
        ValueFormat::Money => format_money(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "\u{2014}".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values_get_thousands_separators() {
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1,234,567");
        assert_eq!(format_value(42.0, ValueFormat::Integer), "42");
    }

    #[test]
    fn money_values_keep_two_decimals() {
        assert_eq!(format_value(1234.5, ValueFormat::Money), "$1,234.50");
        assert_eq!(format_value(0.0, ValueFormat::Money), "$0.00");
    }
}
