/// Pages the application navigates between
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Area recommendations, reached after a successful filter submit
    TopAreas,
    /// Listing detail, reached by selecting a search result
    Detail { id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::TopAreas => "/top-5".to_string(),
            Self::Detail { id } => format!("/detail/{}", id),
        }
    }
}
