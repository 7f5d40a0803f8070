//! Data model types for cut-list calculation.

mod cut;
mod part;
mod request;
mod stock;
mod stock_cut;
mod summary;

pub use cut::Cut;
pub use part::PartRequirement;
pub use request::CutRequest;
pub use stock::StockCatalog;
pub use stock_cut::StockCut;
pub use summary::CutListSummary;
