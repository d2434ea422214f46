pub mod book_reader;
pub mod user;

pub use book_reader::Model as BookReader;
pub use user::Model as User;
