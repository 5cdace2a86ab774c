//! Хранилище заказов обозревателя: канонический набор и активный запрос

use super::query_engine::{evaluate, summarize};
use chrono::{NaiveDate, Utc};
use contracts::domain::a001_order::{validate_batch, OrderRecord, ValidationError};
use contracts::shared::order_query::{
    OrderQuery, OrderSummary, QueryPatch, ResultPage, SortDirection, SortField, SortSpec,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("load #{ticket} is stale: load #{applied} was already applied")]
    StaleLoad { ticket: u64, applied: u64 },
}

/// Номер загрузки; более поздний номер вытесняет более ранние
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn FnMut(&ResultPage) + Send + Sync>;

pub struct OrderStore {
    records: Vec<OrderRecord>,
    version: u64,
    query: OrderQuery,
    initial_query: OrderQuery,
    issued_ticket: u64,
    applied_ticket: u64,
    computed_for: Option<(u64, OrderQuery)>,
    result: ResultPage,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl OrderStore {
    pub fn new(initial_query: OrderQuery) -> Self {
        let result = ResultPage::empty(initial_query.page_size);
        let mut store = Self {
            records: Vec::new(),
            version: 0,
            query: initial_query.clone(),
            initial_query,
            issued_ticket: 0,
            applied_ticket: 0,
            computed_for: None,
            result,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.refresh();
        store
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Версия набора, растёт на каждую успешную загрузку
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn query(&self) -> &OrderQuery {
        &self.query
    }

    pub fn result(&self) -> &ResultPage {
        &self.result
    }

    pub fn summary(&self) -> OrderSummary {
        summarize(&self.records)
    }

    /// Выдать номер для новой загрузки
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_ticket += 1;
        LoadTicket(self.issued_ticket)
    }

    /// Это последняя выданная загрузка, более новых в пути нет
    pub fn is_latest_load(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued_ticket
    }

    /// Заменить набор заказов (без номера загрузки)
    pub fn load(&mut self, records: Vec<OrderRecord>) -> Result<(), StoreError> {
        let ticket = self.begin_load();
        self.apply_load(ticket, records)
    }

    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        records: Vec<OrderRecord>,
    ) -> Result<(), StoreError> {
        self.apply_load_at(ticket, records, Utc::now().date_naive())
    }

    /// Применить загрузку целиком или не применять вовсе.
    ///
    /// Отклоняется, если уже применена более поздняя загрузка или если
    /// хотя бы одна запись нарушает инварианты.
    pub fn apply_load_at(
        &mut self,
        ticket: LoadTicket,
        records: Vec<OrderRecord>,
        ingested_on: NaiveDate,
    ) -> Result<(), StoreError> {
        if ticket.0 <= self.applied_ticket {
            log::warn!(
                "Rejected stale load #{} (load #{} already applied)",
                ticket.0,
                self.applied_ticket
            );
            return Err(StoreError::StaleLoad {
                ticket: ticket.0,
                applied: self.applied_ticket,
            });
        }

        if let Err(e) = validate_batch(&records, ingested_on) {
            log::warn!("Rejected load #{}: {}", ticket.0, e);
            return Err(e.into());
        }

        log::debug!("Applying load #{} with {} orders", ticket.0, records.len());
        self.records = records;
        self.version += 1;
        self.applied_ticket = ticket.0;
        self.refresh();
        Ok(())
    }

    /// Слить частичное изменение в активный запрос; `true`, если запрос изменился
    pub fn set_query(&mut self, patch: QueryPatch) -> bool {
        let changed = self.query.merge(patch);
        if changed {
            log::debug!("Order query changed: {:?}", self.query);
            self.refresh();
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        if !self.result.has_next() {
            return false;
        }
        let page = self.query.page + 1;
        self.set_query(QueryPatch::default().page(page))
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.result.has_previous() {
            return false;
        }
        let page = self.query.page - 1;
        self.set_query(QueryPatch::default().page(page))
    }

    /// Перейти на страницу, ограничив её диапазоном `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let last = self.result.total_pages.max(1);
        self.set_query(QueryPatch::default().page(page.clamp(1, last)))
    }

    /// Повторный клик по тому же полю меняет направление, новое поле сортируется по возрастанию
    pub fn toggle_sort(&mut self, field: SortField) -> bool {
        let current = self.query.sort;
        let sort = if current.field == field {
            SortSpec::new(field, current.direction.toggled())
        } else {
            SortSpec::new(field, SortDirection::Asc)
        };
        self.set_query(QueryPatch::default().sort(sort))
    }

    /// Вернуть запрос к начальному состоянию
    pub fn reset_filters(&mut self) -> bool {
        if self.query == self.initial_query {
            return false;
        }
        self.query = self.initial_query.clone();
        self.refresh();
        true
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn refresh(&mut self) {
        if let Some((version, query)) = &self.computed_for {
            if *version == self.version && *query == self.query {
                return;
            }
        }

        let mut result = evaluate(&self.records, &self.query);
        if result.items.is_empty() && self.query.page > 1 {
            log::debug!(
                "Page {} is past the end of {} matches, resetting to 1",
                self.query.page,
                result.total_matched
            );
            self.query.page = 1;
            result = evaluate(&self.records, &self.query);
        }

        self.computed_for = Some((self.version, self.query.clone()));
        self.result = result;

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.result);
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(OrderQuery::default())
    }
}
