//! Editable multi-stop gradient.
//!
//! Stops live in insertion order and `selected` indexes that backing storage.
//! Nothing in this module ever reorders storage: renderers and subscribers
//! read the position-sorted projection from [`GradientModel::sorted_view`].

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Minimum number of stops a gradient keeps at all times.
pub const MIN_STOPS: usize = 2;

/// A single waypoint of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color
    pub color: Color,
    /// Position along the gradient axis, in `[0, 1]`
    pub position: f32,
}

impl GradientStop {
    /// Create a stop, clamping the position to `[0, 1]`.
    pub fn new(color: Color, position: f32) -> Self {
        Self {
            color,
            position: clamp_position(position),
        }
    }
}

/// Ordered-on-demand list of gradient stops plus the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientModel {
    stops: Vec<GradientStop>,
    selected: Option<usize>,
}

impl GradientModel {
    /// The default two-stop gradient: blue at 0, magenta at 1, first stop selected.
    pub fn new() -> Self {
        Self {
            stops: default_stops(),
            selected: Some(0),
        }
    }

    /// Build a gradient from configured stops.
    ///
    /// Fewer than [`MIN_STOPS`] stops cannot form a gradient, so the defaults
    /// are used instead.
    pub fn from_stops(stops: &[GradientStop]) -> Self {
        if stops.len() < MIN_STOPS {
            log::warn!(
                "Gradient needs at least {} stops, got {}; using defaults",
                MIN_STOPS,
                stops.len()
            );
            return Self::new();
        }

        Self {
            stops: stops
                .iter()
                .map(|stop| GradientStop::new(stop.color, stop.position))
                .collect(),
            selected: Some(0),
        }
    }

    /// Stops in backing-storage (insertion) order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Never true for a model built through this API.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Storage index of the selected stop.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|&index| index < self.stops.len())
    }

    pub fn selected_stop(&self) -> Option<GradientStop> {
        self.selected_index().map(|index| self.stops[index])
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected_stop().map(|stop| stop.color)
    }

    /// Append a stop, select it and return its storage index.
    pub fn add_stop(&mut self, position: f32, color: Color) -> usize {
        self.stops.push(GradientStop::new(color, position));
        let index = self.stops.len() - 1;
        self.selected = Some(index);
        log::debug!("Added gradient stop {} at {:.3}", index, self.stops[index].position);
        index
    }

    /// Select a stop by storage index. Out-of-range indices leave the
    /// selection untouched.
    pub fn select(&mut self, index: usize) -> Option<GradientStop> {
        let stop = *self.stops.get(index)?;
        self.selected = Some(index);
        Some(stop)
    }

    /// Drop the selection; drags and color edits become no-ops until the next select.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the selected stop unless that would leave fewer than
    /// [`MIN_STOPS`]. The previous stop in storage order becomes selected.
    ///
    /// Returns whether a stop was removed.
    pub fn remove_selected(&mut self) -> bool {
        if self.stops.len() <= MIN_STOPS {
            log::debug!("Refusing to remove stop: gradient has {} stops", self.stops.len());
            return false;
        }
        let Some(index) = self.selected_index() else {
            return false;
        };

        self.stops.remove(index);
        self.selected = Some(index.saturating_sub(1));
        log::debug!("Removed gradient stop {}; {} stops remain", index, self.stops.len());
        true
    }

    /// Move the selected stop, clamping to `[0, 1]`. Storage order is kept.
    ///
    /// Returns whether a stop was moved.
    pub fn move_selected(&mut self, position: f32) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        self.stops[index].position = clamp_position(position);
        log::trace!("Moved gradient stop {} to {:.3}", index, self.stops[index].position);
        true
    }

    /// Select the first stop, in storage order, within `tolerance` of `position`.
    ///
    /// This is a first-match hit test, not a nearest-stop search: when two
    /// stops are both in range the earlier-inserted one wins even if it is
    /// farther away.
    pub fn select_nearest(&mut self, position: f32, tolerance: f32) -> Option<usize> {
        let index = self
            .stops
            .iter()
            .position(|stop| (position - stop.position).abs() < tolerance)?;
        self.selected = Some(index);
        Some(index)
    }

    /// Recolor the selected stop. Returns whether a stop was updated.
    pub fn set_selected_color(&mut self, color: Color) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        self.stops[index].color = color;
        true
    }

    /// Stops ordered by ascending position. Ties keep storage order.
    pub fn sorted_view(&self) -> Vec<GradientStop> {
        let mut sorted = self.stops.clone();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// The color of the lowest-position stop.
    pub fn first_color(&self) -> Color {
        self.sorted_view()
            .first()
            .map_or(Color::WHITE, |stop| stop.color)
    }

    /// Linearly interpolate the gradient at `position`, per ARGB channel.
    /// Positions outside the outermost stops take the edge color.
    pub fn sample(&self, position: f32) -> Color {
        let sorted = self.sorted_view();
        let Some(first) = sorted.first() else {
            return Color::WHITE;
        };
        let t = clamp_position(position);

        let mut prev = *first;
        for stop in &sorted[1..] {
            if t <= stop.position {
                let span = (stop.position - prev.position).max(1.0e-6);
                let u = ((t - prev.position) / span).clamp(0.0, 1.0);
                return lerp_color(prev.color, stop.color, u);
            }
            prev = *stop;
        }
        prev.color
    }
}

impl Default for GradientModel {
    fn default() -> Self {
        Self::new()
    }
}

/// The stops a fresh gradient starts with.
pub fn default_stops() -> Vec<GradientStop> {
    vec![
        GradientStop::new(Color::BLUE, 0.0),
        GradientStop::new(Color::MAGENTA, 1.0),
    ]
}

fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let lerp = |x: u8, y: u8| {
        let x = f32::from(x);
        let y = f32::from(y);
        (x + (y - x) * t).round().clamp(0.0, 255.0) as u8
    };
    Color::from_argb(
        lerp(a.alpha(), b.alpha()),
        lerp(a.red(), b.red()),
        lerp(a.green(), b.green()),
        lerp(a.blue(), b.blue()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradient() {
        let model = GradientModel::new();
        assert_eq!(model.len(), 2);
        assert_eq!(model.selected_index(), Some(0));
        assert_eq!(model.stops()[0], GradientStop::new(Color::BLUE, 0.0));
        assert_eq!(model.stops()[1], GradientStop::new(Color::MAGENTA, 1.0));
    }

    #[test]
    fn test_stop_positions_are_clamped() {
        assert_eq!(GradientStop::new(Color::RED, -1.0).position, 0.0);
        assert_eq!(GradientStop::new(Color::RED, 2.0).position, 1.0);
        assert_eq!(GradientStop::new(Color::RED, f32::NAN).position, 0.0);
    }

    #[test]
    fn test_from_stops_falls_back_to_defaults() {
        let model = GradientModel::from_stops(&[GradientStop::new(Color::RED, 0.5)]);
        assert_eq!(model, GradientModel::new());
    }

    #[test]
    fn test_from_stops_clamps_positions() {
        let model = GradientModel::from_stops(&[
            GradientStop {
                color: Color::RED,
                position: -3.0,
            },
            GradientStop {
                color: Color::GREEN,
                position: 0.4,
            },
        ]);
        assert_eq!(model.stops()[0].position, 0.0);
        assert_eq!(model.stops()[1].position, 0.4);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut model = GradientModel::new();
        model.select(1);
        assert_eq!(model.select(5), None);
        assert_eq!(model.selected_index(), Some(1));
    }

    #[test]
    fn test_sample_interpolates() {
        let model = GradientModel::from_stops(&[
            GradientStop::new(Color::BLACK, 0.0),
            GradientStop::new(Color::WHITE, 1.0),
        ]);
        assert_eq!(model.sample(0.0), Color::BLACK);
        assert_eq!(model.sample(1.0), Color::WHITE);
        assert_eq!(model.sample(0.5), Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_sample_clamps_to_edge_stops() {
        let model = GradientModel::from_stops(&[
            GradientStop::new(Color::RED, 0.25),
            GradientStop::new(Color::BLUE, 0.75),
        ]);
        assert_eq!(model.sample(0.1), Color::RED);
        assert_eq!(model.sample(0.9), Color::BLUE);
    }

    #[test]
    fn test_first_color_uses_lowest_position() {
        let mut model = GradientModel::new();
        model.select(1);
        model.move_selected(0.2);
        model.select(0);
        model.move_selected(0.8);
        assert_eq!(model.first_color(), Color::MAGENTA);
    }
}
