use leptos::prelude::*;

/// Цветовой тон бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    /// Токен цвета (используется и как суффикс CSS-модификатора)
    pub fn token(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "primary",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Error => "error",
            BadgeTone::Neutral => "neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with different tones
#[component]
pub fn Badge(
    tone: BadgeTone,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone.css_class(), additional_class())>
            {children()}
        </span>
    }
}
