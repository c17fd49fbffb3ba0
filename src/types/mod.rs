//! Core domain types shared by the parser, the engine and the server.

pub mod numbers;
pub mod order;

pub use numbers::{NumberList, format_number};
pub use order::{SortOrder, UnknownSortOrder};
