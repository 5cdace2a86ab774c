pub mod order_query;
