pub mod transactions_csv;
