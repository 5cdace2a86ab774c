//! Чистое вычисление страницы результата по набору заказов и запросу

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use contracts::domain::a001_order::OrderRecord;
use contracts::enums::PaymentState;
use contracts::shared::order_query::{OrderQuery, OrderSummary, OrderTab, ResultPage, SortField};
use std::cmp::Ordering;
use std::collections::BTreeMap;

impl Searchable for OrderRecord {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.matches_search(filter_lower)
    }
}

impl Sortable for OrderRecord {
    type Field = SortField;

    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::OrderDate => self.order_date.cmp(&other.order_date),
            SortField::Id => self.id.cmp(&other.id),
            SortField::CustomerName => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            SortField::ProductName => self
                .product_name
                .to_lowercase()
                .cmp(&other.product_name.to_lowercase()),
            SortField::GrossValue => self.gross_value.amount_cents.cmp(&other.gross_value.amount_cents),
            SortField::Margin => self.margin.amount_cents.cmp(&other.margin.amount_cents),
            SortField::Status => self.status.cmp(&other.status),
        }
    }

    fn compare_identity(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Вычислить страницу результата.
///
/// Порядок: поиск и фильтр статуса, затем вкладка и фильтр типа, сортировка, срез страницы.
/// Счётчики вкладок считаются без активной вкладки, счётчики типов без фильтра типа.
/// Запрос не изменяется: сброс страницы за пределами результата делает хранилище.
pub fn evaluate(records: &[OrderRecord], query: &OrderQuery) -> ResultPage {
    let base: Vec<&OrderRecord> = filter_list(records, &query.search_text)
        .into_iter()
        .filter(|record| query.status_filter.matches(&record.status))
        .collect();

    let mut tab_counts: BTreeMap<OrderTab, usize> = BTreeMap::new();
    for tab in OrderTab::all() {
        let count = base
            .iter()
            .filter(|record| query.type_filter.matches(&record.type_code) && tab.contains(&record.status))
            .count();
        tab_counts.insert(tab, count);
    }

    let mut type_counts = BTreeMap::new();
    for record in base.iter().filter(|record| query.active_tab.contains(&record.status)) {
        *type_counts.entry(record.type_code.clone()).or_insert(0) += 1;
    }

    let mut matched: Vec<&OrderRecord> = base
        .into_iter()
        .filter(|record| query.active_tab.contains(&record.status))
        .filter(|record| query.type_filter.matches(&record.type_code))
        .collect();

    sort_list(&mut matched, query.sort.field, query.sort.direction);

    let page_size = query.page_size.max(1);
    let total_matched = matched.len();
    let total_pages = (total_matched + page_size - 1) / page_size;
    let page = query.page.max(1);

    let items = matched
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    ResultPage {
        items,
        total_matched,
        tab_counts,
        type_counts,
        page,
        page_size,
        total_pages,
    }
}

/// Сводка по всему набору (без учёта запроса)
pub fn summarize(records: &[OrderRecord]) -> OrderSummary {
    let mut summary = OrderSummary {
        total: records.len(),
        ..OrderSummary::default()
    };
    for record in records {
        *summary.by_status.entry(record.status.clone()).or_insert(0) += 1;
        match record.payment_state {
            PaymentState::Paid => summary.paid += 1,
            PaymentState::Unpaid => summary.unpaid += 1,
            PaymentState::Unknown(_) => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::mock_data::{demo_orders, order};
    use contracts::domain::a001_order::Money;
    use contracts::enums::{OrderStatus, OrderType};
    use contracts::shared::order_query::{Facet, QueryPatch, SortDirection, SortSpec};

    fn query_with(patch: QueryPatch) -> OrderQuery {
        let mut query = OrderQuery::default();
        query.merge(patch);
        query
    }

    fn ids(page: &ResultPage) -> Vec<&str> {
        page.items.iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_all_tab_first_page_of_84() {
        let records = demo_orders();
        assert_eq!(records.len(), 84);

        let page = evaluate(&records, &OrderQuery::default());
        assert_eq!(page.total_matched, 84);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.tab_count(OrderTab::All), 84);
    }

    #[test]
    fn test_last_page_is_partial() {
        let records = demo_orders();
        let page = evaluate(&records, &query_with(QueryPatch::default().page(9)));
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.visible_range(), Some((81, 84)));
        assert!(!page.has_next());
    }

    #[test]
    fn test_huge_page_yields_empty_slice() {
        let records = demo_orders();
        let page = evaluate(&records, &query_with(QueryPatch::default().page(usize::MAX)));
        assert!(page.items.is_empty());
        assert_eq!(page.total_matched, 84);
        assert_eq!(page.visible_range(), None);
    }

    #[test]
    fn test_status_filter_completo() {
        let records = vec![
            order("1", OrderStatus::Completed),
            order("2", OrderStatus::Pending),
            order("3", OrderStatus::Completed),
            order("4", OrderStatus::Delivered),
            order("5", OrderStatus::Completed),
        ];
        let query = query_with(
            QueryPatch::default().status_filter(Facet::Only(OrderStatus::parse("Completo"))),
        );
        let page = evaluate(&records, &query);
        assert_eq!(page.total_matched, 3);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_type_filter_exact_match() {
        let mut a = order("1", OrderStatus::Pending);
        a.type_code = OrderType::Cafe;
        let mut b = order("2", OrderStatus::Pending);
        b.type_code = OrderType::Other("SPOT".to_string());
        let records = vec![a, b, order("3", OrderStatus::Pending)];

        let page = evaluate(
            &records,
            &query_with(QueryPatch::default().type_filter(Facet::Only(OrderType::from_code("spot")))),
        );
        assert_eq!(ids(&page), vec!["2"]);
        assert_eq!(page.type_counts.get(&OrderType::Cafe), Some(&1));
    }

    #[test]
    fn test_search_matches_customer_product_and_id() {
        let mut a = order("10685", OrderStatus::Pending);
        a.customer_name = "Rádio Atlântida".to_string();
        let mut b = order("20001", OrderStatus::Pending);
        b.product_name = "Spot Rádio 30s".to_string();
        let mut c = order("30002", OrderStatus::Pending);
        c.customer_name = "Padaria".to_string();
        c.product_name = "Vinheta".to_string();
        let records = vec![a, b, c];

        let by_text = evaluate(&records, &query_with(QueryPatch::default().search("RÁDIO")));
        assert_eq!(by_text.total_matched, 2);

        let by_id = evaluate(&records, &query_with(QueryPatch::default().search("0685")));
        assert_eq!(ids(&by_id), vec!["10685"]);

        let empty = evaluate(&records, &query_with(QueryPatch::default().search("")));
        assert_eq!(empty.total_matched, 3);
    }

    #[test]
    fn test_default_sort_is_date_desc_with_id_tie_break() {
        let mut a = order("b", OrderStatus::Pending);
        a.order_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut b = order("a", OrderStatus::Pending);
        b.order_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut c = order("c", OrderStatus::Pending);
        c.order_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let records = vec![a, b, c];

        let page = evaluate(&records, &OrderQuery::default());
        assert_eq!(ids(&page), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_gross_value_asc() {
        let mut a = order("1", OrderStatus::Pending);
        a.gross_value = Money::brl(5_000);
        a.margin = Money::brl(1_000);
        let mut b = order("2", OrderStatus::Pending);
        b.gross_value = Money::brl(1_000);
        b.margin = Money::brl(100);
        let records = vec![a, b];

        let query = query_with(
            QueryPatch::default().sort(SortSpec::new(SortField::GrossValue, SortDirection::Asc)),
        );
        assert_eq!(ids(&evaluate(&records, &query)), vec!["2", "1"]);
    }

    #[test]
    fn test_tab_counts_ignore_active_tab() {
        let records = demo_orders();
        let base = query_with(QueryPatch::default().search("a"));
        let reference = evaluate(&records, &base).tab_counts;

        for tab in OrderTab::all() {
            let mut query = base.clone();
            query.merge(QueryPatch::default().tab(tab));
            let page = evaluate(&records, &query);
            assert_eq!(page.tab_counts, reference, "tab {:?} changed counts", tab);
            assert_eq!(page.total_matched, reference[&tab]);
        }
    }

    #[test]
    fn test_tab_counts_respect_other_filters() {
        let records = vec![
            order("1", OrderStatus::Completed),
            order("2", OrderStatus::Pending),
            order("3", OrderStatus::Completed),
        ];
        let query = query_with(
            QueryPatch::default().status_filter(Facet::Only(OrderStatus::Completed)),
        );
        let page = evaluate(&records, &query);
        assert_eq!(page.tab_count(OrderTab::All), 2);
        assert_eq!(page.tab_count(OrderTab::Completed), 2);
        assert_eq!(page.tab_count(OrderTab::Pending), 0);
    }

    #[test]
    fn test_unknown_status_only_in_all_tab() {
        let records = vec![
            order("1", OrderStatus::Unknown("CANCELADO".to_string())),
            order("2", OrderStatus::Pending),
        ];
        let page = evaluate(&records, &OrderQuery::default());
        assert_eq!(page.tab_count(OrderTab::All), 2);
        let known: usize = OrderTab::all()
            .into_iter()
            .filter(|tab| *tab != OrderTab::All)
            .map(|tab| page.tab_count(tab))
            .sum();
        assert_eq!(known, 1);
    }

    #[test]
    fn test_page_size_bounds_hold_for_every_page() {
        let records = demo_orders();
        for page_no in 1..=12 {
            let page = evaluate(&records, &query_with(QueryPatch::default().page(page_no)));
            assert!(page.items.len() <= page.page_size);
            assert!(page.total_matched >= page.items.len());
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let records = demo_orders();
        let query = query_with(
            QueryPatch::default()
                .search("r")
                .sort(SortSpec::new(SortField::Status, SortDirection::Desc)),
        );
        assert_eq!(evaluate(&records, &query), evaluate(&records, &query));
    }

    #[test]
    fn test_empty_records() {
        let page = evaluate(&[], &OrderQuery::default());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.tab_count(OrderTab::Completed), 0);
    }

    #[test]
    fn test_summarize() {
        let mut paid = order("1", OrderStatus::Completed);
        paid.payment_state = PaymentState::Paid;
        let records = vec![paid, order("2", OrderStatus::Pending), order("3", OrderStatus::Pending)];
        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.paid, 1);
        assert_eq!(summary.unpaid, 2);
        assert_eq!(summary.status_count(&OrderStatus::Pending), 2);
        assert_eq!(summary.status_count(&OrderStatus::Delivered), 0);
    }
}
