//! IPOs module - domain models, CSV import, services, and traits.

mod csv_import;
mod ipos_errors;
mod ipos_model;
mod ipos_service;
mod ipos_traits;



pub use csv_import::parse_ipo_csv;
pub use ipos_errors::IpoError;
pub use ipos_model::{parse_numeric, Ipo, NewIpo};
pub use ipos_service::IpoService;
pub use ipos_traits::{IpoRepositoryTrait, IpoServiceTrait};
