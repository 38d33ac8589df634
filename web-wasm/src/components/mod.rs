pub mod header;
pub mod page_view;
pub mod progress_bar;
pub mod result_panel;
pub mod toast;
pub mod upload_area;
