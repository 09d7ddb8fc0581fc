pub mod authors;
pub mod posts;

pub use authors::Entity as Authors;
pub use authors::Model as Author;
pub use posts::Entity as Posts;
pub use posts::Model as Post;
