use crate::domain::a001_order::OrderRecord;
use crate::enums::{OrderStatus, OrderType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::query::OrderTab;

/// Страница результата запроса (пересчитывается на каждое изменение запроса)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Записи текущей страницы
    pub items: Vec<OrderRecord>,
    /// Количество совпадений до пагинации
    pub total_matched: usize,
    /// Счётчики вкладок: активная вкладка в них не учитывается
    pub tab_counts: BTreeMap<OrderTab, usize>,
    /// Счётчики по типам: фильтр по типу в них не учитывается
    pub type_counts: BTreeMap<OrderType, usize>,
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl ResultPage {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_matched: 0,
            tab_counts: OrderTab::all().into_iter().map(|tab| (tab, 0)).collect(),
            type_counts: BTreeMap::new(),
            page: 1,
            page_size,
            total_pages: 0,
        }
    }

    pub fn tab_count(&self, tab: OrderTab) -> usize {
        self.tab_counts.get(&tab).copied().unwrap_or(0)
    }

    /// Диапазон показанных записей (1-based, включительно)
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.page.saturating_sub(1).saturating_mul(self.page_size) + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Сводка по всему набору заказов (карточки над списком)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
    pub paid: usize,
    pub unpaid: usize,
}

impl OrderSummary {
    pub fn status_count(&self, status: &OrderStatus) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}
