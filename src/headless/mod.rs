//! State and handlers behind the presentational pages.

mod index_logic;

pub use index_logic::{use_index_logic, IndexLogic};
