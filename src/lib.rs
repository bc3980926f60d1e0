//! craftbooks domain core: the unit catalog and the production-capacity
//! calculator behind the product-manufacturing screens. Screens, navigation,
//! and the REST layer live in the app and consume these crates in-process.

pub use craftbooks_manufacturing as manufacturing;
pub use craftbooks_units as units;
