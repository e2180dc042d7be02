pub mod float;
pub mod index;
pub mod io;
pub mod multi;

pub use self::float::FloatMap;
pub use self::index::IndexMap;
pub use self::multi::MultiChannelImage;
