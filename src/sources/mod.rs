pub mod traits;
pub mod yml;

pub use traits::CatalogSource;
pub use yml::YmlCatalogSource;
