//! Запрос к списку заказов и его результат
//!
//! Общие DTO: сегодня их вычисляет клиент над моковыми данными,
//! в будущем тот же контракт сможет отдавать бэкенд.

pub mod query;
pub mod result;

pub use query::{Facet, OrderQuery, OrderTab, QueryPatch, SortDirection, SortField, SortSpec};
pub use result::{OrderSummary, ResultPage};

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 10;
