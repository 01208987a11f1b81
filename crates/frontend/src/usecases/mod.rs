pub mod u501_select_filters;
