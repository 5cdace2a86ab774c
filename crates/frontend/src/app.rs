use crate::config::default_config;
use crate::domain::a001_order::ui::list::OrderExplorer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация обозревателя доступна всем компонентам через context
    provide_context(default_config().clone());

    view! {
        <main class="app-main">
            <OrderExplorer />
        </main>
    }
}
