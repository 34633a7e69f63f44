mod assets;
mod audio;
mod dispatch;
mod health;
mod image;
pub mod response;
mod text;

pub use assets::{augment_3d_handler, process_3d_handler, serve_upload_handler};
pub use audio::{augment_audio_handler, process_audio_handler};
pub use health::health_handler;
pub use image::{augment_image_handler, process_image_handler};
pub use text::{augment_text_handler, process_text_handler};
