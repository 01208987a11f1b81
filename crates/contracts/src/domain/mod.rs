pub mod a001_filter;
