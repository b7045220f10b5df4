#[cfg(feature = "svg")]
pub mod svg;

pub trait RenderSVG {
    type Canvas;

    /// Render self onto canvas returning Ok in case of success or a string indicating the failure.
    fn render(self, canvas: Self::Canvas) -> Result<Self::Canvas, String>;
}
