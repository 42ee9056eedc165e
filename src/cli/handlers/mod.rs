pub mod compare;
pub mod decode;
pub mod dump;
pub mod encode;
pub mod list;
