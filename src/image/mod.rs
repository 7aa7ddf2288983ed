pub mod border;
pub mod buf;
pub mod color;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::buf::ImageBufU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{Channels, ImageU8};
