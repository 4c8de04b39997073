//! Data model types

mod artwork;
mod page;
mod page_number;
mod record;

pub use artwork::*;
pub use page::*;
pub use page_number::*;
pub use record::*;
