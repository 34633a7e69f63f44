pub mod audio;
pub mod imaging;
pub mod observability;
pub mod storage;
pub mod text;
