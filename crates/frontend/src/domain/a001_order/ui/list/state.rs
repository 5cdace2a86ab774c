use crate::config::ExplorerConfig;
use crate::domain::a001_order::store::OrderStore;
use crate::domain::a001_order::view_state::ViewState;
use leptos::prelude::*;

/// Реактивное состояние страницы обозревателя
#[derive(Clone, Copy)]
pub struct OrderExplorerState {
    pub store: RwSignal<OrderStore>,
    pub view: RwSignal<ViewState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn create_state(config: &ExplorerConfig) -> OrderExplorerState {
    OrderExplorerState {
        store: RwSignal::new(OrderStore::new(config.initial_query())),
        view: RwSignal::new(ViewState::new(config.view.mode)),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}
