/// Visual state applied to the overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarVisual {
    /// Bar width as a whole percentage of its container.
    pub width_pct: u32,
    /// Whether the bar is shown at all.
    pub visible: bool,
}

/// Computes the visual state for a load fraction. The bar is shown only
/// while the fraction is strictly between zero and one.
pub fn visual_for(fraction: f64) -> BarVisual {
    BarVisual {
        width_pct: (fraction * 100.0).round() as u32,
        visible: 0.0 < fraction && fraction < 1.0,
    }
}

/// Mutable overlay element owned by the host page.
pub trait ProgressSurface: Send + Sync {
    /// Applies a computed visual state to the element.
    fn apply(&self, visual: BarVisual);
}

/// Renders load fractions onto an injected surface.
pub struct ProgressBar {
    surface: Box<dyn ProgressSurface>,
}

impl ProgressBar {
    pub fn new(surface: Box<dyn ProgressSurface>) -> Self {
        Self { surface }
    }

    pub fn render(&self, fraction: f64) {
        self.surface.apply(visual_for(fraction));
    }
}
