//! The polymorphic numeric interface.

/// Capability shared by every concrete numeric variant.
///
/// The calculator's evaluation layer holds values behind this trait: it
/// only ever needs a best-effort complex approximation and a string
/// rendering, so variants override just the methods that differ from the
/// trivial defaults.
pub trait Number {
    /// Returns the value as a `(real, imaginary)` pair of doubles.
    fn get(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Renders the value, optionally enclosed in parentheses.
    fn print(&self, use_parentheses: bool) -> String {
        let _ = use_parentheses;
        String::new()
    }
}
