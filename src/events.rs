pub mod page;
pub mod pointer;

pub use page::wire_shell;
