//! Testimonial carousel state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Autoplay period used when no configuration overrides it.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);

/// Whether the timer may advance the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CarouselState {
    /// Timer ticks advance the index.
    #[default]
    Autoplaying,
    /// The visitor navigated manually; timer ticks are ignored.
    Paused,
}

impl CarouselState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselState::Autoplaying => "autoplaying",
            CarouselState::Paused => "paused",
        }
    }
}

/// Cyclic index over a non-empty list of slides.
///
/// There is no terminal state. The index is always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
    len: usize,
    state: CarouselState,
}

impl Carousel {
    /// Start autoplaying at the first of `len` slides.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            index: 0,
            len,
            state: CarouselState::Autoplaying,
        })
    }

    /// Carousel over the given slides.
    pub fn for_items<T>(items: &[T]) -> Result<Self, CarouselError> {
        Self::new(items.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state == CarouselState::Autoplaying
    }

    /// Timer tick. Advances only while autoplaying; returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_autoplaying() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Manual advance. Pauses autoplay.
    pub fn next(&mut self) -> usize {
        self.state = CarouselState::Paused;
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Manual step back, wrapping from the first slide to the last. Pauses autoplay.
    pub fn previous(&mut self) -> usize {
        self.state = CarouselState::Paused;
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to a slide (dot navigation). Pauses autoplay.
    ///
    /// Out-of-range indexes are rejected and change nothing.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = CarouselState::Paused;
        self.index = index;
        Ok(())
    }

    /// The current slide.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Carousel::new(0).unwrap_err(), CarouselError::Empty);
        assert_eq!(
            Carousel::for_items::<u8>(&[]).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn test_tick_advances_while_autoplaying() {
        let mut carousel = Carousel::new(4).unwrap();
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);
        assert!(carousel.is_autoplaying());
    }

    #[test]
    fn test_tick_wraps() {
        let mut carousel = Carousel::new(4).unwrap();
        for _ in 0..4 {
            carousel.tick();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut carousel = Carousel::new(4).unwrap();
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.state(), CarouselState::Paused);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(4).unwrap();
        assert_eq!(carousel.previous(), 3);
        assert_eq!(carousel.state(), CarouselState::Paused);
    }

    #[test]
    fn test_paused_ignores_ticks() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.next();
        for _ in 0..10 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_jump_to() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.jump_to(2).unwrap();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.state(), CarouselState::Paused);
    }

    #[test]
    fn test_jump_out_of_range_changes_nothing() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.tick();
        let before = carousel;

        assert_eq!(
            carousel.jump_to(4).unwrap_err(),
            CarouselError::IndexOutOfRange { index: 4, len: 4 }
        );
        assert_eq!(carousel, before);
        assert!(carousel.is_autoplaying());
    }

    #[test]
    fn test_single_slide() {
        let mut carousel = Carousel::new(1).unwrap();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.previous(), 0);
    }

    #[test]
    fn test_current() {
        let slides = ["a", "b", "c"];
        let mut carousel = Carousel::for_items(&slides).unwrap();
        carousel.previous();
        assert_eq!(carousel.current(&slides), Some(&"c"));
    }
}
