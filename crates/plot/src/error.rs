//! Error types for ombak-plot.

/// Error type for plot rendering.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Wraps any failure from the drawing backend.
    #[error("failed to render plot: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::Render(value.to_string())
    }
}
