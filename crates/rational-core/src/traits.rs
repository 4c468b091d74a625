/// Core trait for anything that drains a contributing area to a point.
///
/// Implemented by the bare area/coefficient model and by `Basin`, which
/// embeds one. Downstream code that only needs the runoff-producing area
/// takes `&impl Drainage`.
pub trait Drainage {
    /// Contributing drainage area [acres].
    fn area(&self) -> f64;

    /// Composite runoff coefficient [-], in [0, 1].
    fn runoff_coefficient(&self) -> f64;

    /// Effective runoff-producing area [acres]: `area * c`.
    fn runoff_area(&self) -> f64 {
        self.area() * self.runoff_coefficient()
    }
}
