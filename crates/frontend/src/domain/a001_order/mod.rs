//! Обозреватель заказов: хранилище, вычисление страницы, состояние отображения

pub mod mock_data;
pub mod presenter;
pub mod query_engine;
pub mod store;
pub mod ui;
pub mod view_state;

pub use presenter::{present, DisplayRecord, PresentationError};
pub use query_engine::{evaluate, summarize};
pub use store::{LoadTicket, OrderStore, StoreError, SubscriptionId};
pub use view_state::{ViewMode, ViewState};
