use axum::response::Html;

/// Page views served by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Analyzes one PDF at a time.
    Single,
    /// Analyzes a set of PDFs and exports them under generated names.
    Batch,
}

impl View {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Single => "Single Analyzer",
            Self::Batch => "Batch Analyzer",
        }
    }

    #[must_use]
    pub fn html(self) -> &'static str {
        match self {
            Self::Single => include_str!("../../pages/single.html"),
            Self::Batch => include_str!("../../pages/batch.html"),
        }
    }

    #[must_use]
    pub fn render(self) -> Html<&'static str> {
        Html(self.html())
    }
}
