mod hooks;
mod input;
mod output;
mod state;
mod terminal;

pub use terminal::Terminal;
