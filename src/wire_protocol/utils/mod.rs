pub mod cursor;
pub mod peek_backend;
pub mod read_cstr;
pub mod write;

pub use cursor::PayloadCursor;
pub use peek_backend::{FrameHeader, peek_backend};
pub use read_cstr::read_cstr;
pub use write::{put_count, put_cstr, put_nullable_bytes};
