mod disconnect;
mod play_status;
mod text;

pub use disconnect::*;
pub use play_status::*;
pub use text::*;
