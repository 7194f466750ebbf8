mod heat;
mod utils;

pub use heat::heat_color;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{fade_to_black_by, fill_solid, hsv};

pub type Rgb = RGB8;
pub type Hsv = HSV;
