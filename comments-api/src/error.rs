use crate::CommentId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment {0} does not exist")]
    NotFound(CommentId),

    #[error("Cannot reply to comment {0} as it does not exist")]
    ParentNotFound(CommentId),

    #[error("Comment content is empty")]
    EmptyContent,
}

impl Error {
    /// Errors that only mean the user clicked something that vanished meanwhile
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::ParentNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds() {
        assert!(Error::NotFound(CommentId(1)).is_not_found());
        assert!(Error::ParentNotFound(CommentId(1)).is_not_found());
        assert!(!Error::EmptyContent.is_not_found());
    }
}
