/// Coupled min/max adapter.
///
/// Wraps a pair of properties that must stay ordered with a minimum gap
/// between them (camera near/far is the canonical pair). Writes through
/// one side and drags the other along when the gap would be violated, so
/// two independent sliders can never produce an inverted range.

/// Paired min/max view over two properties of one target.
///
/// After any setter: `max >= min + min_gap`.
pub struct MinMaxAdapter<'a, T: ?Sized> {
    target: &'a mut T,
    get_min: fn(&T) -> f32,
    set_min: fn(&mut T, f32),
    get_max: fn(&T) -> f32,
    set_max: fn(&mut T, f32),
    min_gap: f32,
}

impl<'a, T: ?Sized> MinMaxAdapter<'a, T> {
    /// Borrow `target`, wrapping the two properties exposed by the
    /// accessor pairs. `min_gap` is the smallest allowed `max - min`.
    pub fn new(
        target: &'a mut T,
        get_min: fn(&T) -> f32,
        set_min: fn(&mut T, f32),
        get_max: fn(&T) -> f32,
        set_max: fn(&mut T, f32),
        min_gap: f32,
    ) -> Self {
        Self { target, get_min, set_min, get_max, set_max, min_gap }
    }

    /// Current lower bound.
    pub fn min(&self) -> f32 {
        (self.get_min)(self.target)
    }

    /// Current upper bound.
    pub fn max(&self) -> f32 {
        (self.get_max)(self.target)
    }

    /// Set the lower bound, pushing the upper bound up if the gap would
    /// be violated.
    pub fn set_min(&mut self, value: f32) {
        (self.set_min)(self.target, value);
        let floor = value + self.min_gap;
        if (self.get_max)(self.target) < floor {
            (self.set_max)(self.target, floor);
        }
    }

    /// Set the upper bound, pulling the lower bound down if the gap would
    /// be violated.
    pub fn set_max(&mut self, value: f32) {
        (self.set_max)(self.target, value);
        let ceiling = value - self.min_gap;
        if (self.get_min)(self.target) > ceiling {
            (self.set_min)(self.target, ceiling);
        }
    }
}

#[cfg(test)]
#[path = "min_max_tests.rs"]
mod tests;
