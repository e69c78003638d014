#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    PageNotFound,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::PageNotFound => "This planning page is not available.",
        }
    }
}
