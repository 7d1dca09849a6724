// Text measurement and page geometry.
// Everything here is pure: no canvas, no PDF objects.

pub mod font_metrics;
pub mod page;
pub mod wrap;
