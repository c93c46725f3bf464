use crate::core::data::colour::Colour;

/// Maps an escape-time result to a colour.
///
/// Implementations are pure functions of the iteration count and the budget
/// they were built with, so the coarse and precise passes of a request agree
/// on colour. Counts above the budget are treated as the budget.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn kind(&self) -> ColourSchemeKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKind {
    #[default]
    RedRamp,
    FireGradient,
    BlueWhiteGradient,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[Self::RedRamp, Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RedRamp => "Red ramp",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Fraction of the budget consumed, in `[0, 1]`.
#[inline]
pub(crate) fn budget_fraction(iterations: u32, max_iterations: u32) -> f64 {
    if max_iterations == 0 {
        return 1.0;
    }

    f64::from(iterations.min(max_iterations)) / f64::from(max_iterations)
}
