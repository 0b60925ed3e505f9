mod central_panel;
mod menu_bar;
mod toolbar;

pub use central_panel::central_panel;
pub use menu_bar::menu_bar;
pub use toolbar::toolbar;
