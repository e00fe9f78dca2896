pub mod search_bar;
