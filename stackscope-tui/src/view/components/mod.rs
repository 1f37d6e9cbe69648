pub mod cloud_select;
pub mod command;
pub mod help;
pub mod sidebar;
pub mod statusbar;
