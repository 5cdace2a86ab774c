use crate::shared::components::table::format_number_int;
use crate::shared::components::ui::badge::BadgeTone;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка со счётчиком над списком
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    #[prop(optional, default = BadgeTone::Neutral)]
    tone: BadgeTone,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", tone.token())>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || format_number_int(value.get())}</div>
        </div>
    }
}
