pub mod use_search_shortcut;
