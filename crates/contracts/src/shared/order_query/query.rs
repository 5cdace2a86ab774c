use crate::enums::{OrderStatus, OrderType};
use serde::{Deserialize, Serialize};

use super::DEFAULT_PAGE_SIZE;

/// Вкладка списка заказов (корзина по статусу)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    All,
    Prepared,
    Delivered,
    Completed,
    Pending,
}

impl OrderTab {
    /// Все вкладки в порядке отображения
    pub fn all() -> [OrderTab; 5] {
        [
            OrderTab::All,
            OrderTab::Prepared,
            OrderTab::Delivered,
            OrderTab::Completed,
            OrderTab::Pending,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderTab::All => "all",
            OrderTab::Prepared => "prepared",
            OrderTab::Delivered => "delivered",
            OrderTab::Completed => "completed",
            OrderTab::Pending => "pending",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }

    /// Попадает ли статус в корзину вкладки
    pub fn contains(&self, status: &OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Prepared => *status == OrderStatus::Prepared,
            OrderTab::Delivered => *status == OrderStatus::Delivered,
            OrderTab::Completed => *status == OrderStatus::Completed,
            OrderTab::Pending => *status == OrderStatus::Pending,
        }
    }
}

impl Default for OrderTab {
    fn default() -> Self {
        OrderTab::All
    }
}

/// Значение фасетного фильтра: "все" или конкретное значение
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

/// Поле сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    OrderDate,
    Id,
    CustomerName,
    ProductName,
    GrossValue,
    Margin,
    Status,
}

impl SortField {
    pub fn code(&self) -> &'static str {
        match self {
            SortField::OrderDate => "order_date",
            SortField::Id => "id",
            SortField::CustomerName => "customer_name",
            SortField::ProductName => "product_name",
            SortField::GrossValue => "gross_value",
            SortField::Margin => "margin",
            SortField::Status => "status",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            SortField::OrderDate,
            SortField::Id,
            SortField::CustomerName,
            SortField::ProductName,
            SortField::GrossValue,
            SortField::Margin,
            SortField::Status,
        ]
        .into_iter()
        .find(|field| field.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::OrderDate, SortDirection::Desc)
    }
}

/// Активный запрос обозревателя заказов
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderQuery {
    pub active_tab: OrderTab,
    pub type_filter: Facet<OrderType>,
    pub status_filter: Facet<OrderStatus>,
    pub search_text: String,
    pub sort: SortSpec,
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub page_size: usize,
}

impl OrderQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            active_tab: OrderTab::All,
            type_filter: Facet::All,
            status_filter: Facet::All,
            search_text: String::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Смещение первой записи текущей страницы
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Слить частичное изменение в запрос.
    ///
    /// Изменение любого поля, кроме `page`, сбрасывает страницу на 1.
    /// Возвращает `true`, если запрос изменился.
    pub fn merge(&mut self, patch: QueryPatch) -> bool {
        let mut filters_changed = false;

        if let Some(tab) = patch.active_tab {
            filters_changed |= replace_if_changed(&mut self.active_tab, tab);
        }
        if let Some(type_filter) = patch.type_filter {
            filters_changed |= replace_if_changed(&mut self.type_filter, type_filter);
        }
        if let Some(status_filter) = patch.status_filter {
            filters_changed |= replace_if_changed(&mut self.status_filter, status_filter);
        }
        if let Some(search_text) = patch.search_text {
            filters_changed |= replace_if_changed(&mut self.search_text, search_text);
        }
        if let Some(sort) = patch.sort {
            filters_changed |= replace_if_changed(&mut self.sort, sort);
        }

        let requested_page = if filters_changed {
            Some(1)
        } else {
            patch.page.map(|page| page.max(1))
        };

        let page_changed = match requested_page {
            Some(page) => replace_if_changed(&mut self.page, page),
            None => false,
        };

        filters_changed || page_changed
    }
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Частичное изменение запроса: `None` означает "не трогать"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPatch {
    pub active_tab: Option<OrderTab>,
    pub type_filter: Option<Facet<OrderType>>,
    pub status_filter: Option<Facet<OrderStatus>>,
    pub search_text: Option<String>,
    pub sort: Option<SortSpec>,
    pub page: Option<usize>,
}

impl QueryPatch {
    pub fn tab(mut self, tab: OrderTab) -> Self {
        self.active_tab = Some(tab);
        self
    }

    pub fn type_filter(mut self, filter: Facet<OrderType>) -> Self {
        self.type_filter = Some(filter);
        self
    }

    pub fn status_filter(mut self, filter: Facet<OrderStatus>) -> Self {
        self.status_filter = Some(filter);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}
