mod status_console;

pub use status_console::StatusConsole;
