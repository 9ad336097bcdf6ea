pub mod greet;
pub mod init;
pub mod list;
