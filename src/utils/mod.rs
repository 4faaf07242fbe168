pub mod terminal;

pub use terminal::strip_ansi_codes;
