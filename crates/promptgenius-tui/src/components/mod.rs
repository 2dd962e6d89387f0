pub mod about_view;
pub mod option_list;
