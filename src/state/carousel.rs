//! Testimonials and the rotating carousel that shows them

use super::timer::Interval;
use std::time::{Duration, Instant};

/// Auto-advance period
pub const CAROUSEL_PERIOD: Duration = Duration::from_millis(5000);

/// Highest rating a testimonial can carry
pub const MAX_RATING: u8 = 5;

/// A patient testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub image_ref: &'static str,
    pub text: &'static str,
    rating: u8,
}

impl Testimonial {
    /// Ratings above [`MAX_RATING`] are clamped
    pub const fn new(name: &'static str, image_ref: &'static str, text: &'static str, rating: u8) -> Self {
        let rating = if rating > MAX_RATING { MAX_RATING } else { rating };
        Self {
            name,
            image_ref,
            text,
            rating,
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Filled and empty stars for the rating
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating);
        let empty = usize::from(MAX_RATING - self.rating);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial::new(
        "Marina Santos",
        "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2",
        "A abordagem do Dr. Fher transformou completamente minha qualidade de vida. A precisão dos diagnósticos e o tratamento personalizado superaram todas as minhas expectativas.",
        5,
    ),
    Testimonial::new(
        "Carlos Ribeiro",
        "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2",
        "Nunca imaginei que a bioengenharia pudesse ser aplicada de forma tão humana. O Dr. Fher não apenas trata, ele projeta soluções únicas para cada paciente.",
        5,
    ),
    Testimonial::new(
        "Ana Oliveira",
        "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2",
        "A medicina de precisão do Dr. Fher revolucionou meu tratamento. Cada etapa foi meticulosamente planejada e os resultados foram extraordinários.",
        5,
    ),
];

/// Cyclic cursor over a fixed list of testimonials
#[derive(Debug)]
pub struct TestimonialCarousel {
    items: &'static [Testimonial],
    index: usize,
    auto_advance: Interval,
}

impl TestimonialCarousel {
    /// Start at the first testimonial with auto-advance running
    pub fn new(items: &'static [Testimonial], now: Instant) -> Self {
        Self {
            items,
            index: 0,
            auto_advance: Interval::start(now, CAROUSEL_PERIOD),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }

    /// Jump to a dot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len() {
            self.index = index;
        }
    }

    /// Advance once for every period that elapsed
    pub fn tick(&mut self, now: Instant) {
        for _ in 0..self.auto_advance.fire_count(now) {
            self.next();
        }
    }

    #[allow(dead_code)]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_active()
    }

    /// Stop the auto-advance timer for good
    pub fn stop(&mut self) {
        self.auto_advance.cancel();
    }
}
