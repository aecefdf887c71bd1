pub mod repl;

pub use repl::{print_farewell, print_welcome, process_line, run_repl_mode, LoopControl};
