pub mod band;
pub mod gray;
pub mod io;
pub mod pgm;
pub mod traits;
pub mod u8;

pub use self::band::BandMut;
pub use self::gray::GrayImageU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
