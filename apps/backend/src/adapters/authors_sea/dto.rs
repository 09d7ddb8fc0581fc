//! DTOs for authors_sea adapter.

/// DTO for creating a new author.
#[derive(Debug, Clone)]
pub struct AuthorCreate {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl AuthorCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            bio: bio.into(),
        }
    }
}
