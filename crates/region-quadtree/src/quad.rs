//! Named quadrants and a four-slot container indexed by them.

use std::ops::{Index, IndexMut};

/// One of the four quadrants of a subdivided region.
///
/// y increases to the north, so the north quadrants hold the upper half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

    /// Position of the quadrant in traversal order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::NW => 0,
            Self::NE => 1,
            Self::SW => 2,
            Self::SE => 3,
        }
    }
}

/// A value for each quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}

impl<T> Quad<T> {
    /// Builds a quad by calling `f` once per quadrant, in traversal order.
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Self {
            nw: f(Quadrant::NW),
            ne: f(Quadrant::NE),
            sw: f(Quadrant::SW),
            se: f(Quadrant::SE),
        }
    }

    /// Iterates NW, NE, SW, SE.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        [&self.nw, &self.ne, &self.sw, &self.se].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
}

impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;

    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}

impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;

    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}

impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_order() {
        let quad = Quad::from_fn(Quadrant::index);
        assert_eq!(quad.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(
            Quadrant::ALL.map(Quadrant::index),
            [0, 1, 2, 3],
        );
    }

    #[test]
    fn index_matches_fields() {
        let mut quad = Quad {
            nw: 'a',
            ne: 'b',
            sw: 'c',
            se: 'd',
        };
        assert_eq!(quad[Quadrant::NE], 'b');
        quad[Quadrant::SW] = 'z';
        assert_eq!(quad.sw, 'z');
        assert_eq!(quad.iter().rev().copied().collect::<String>(), "dzba");
    }

    #[test]
    fn map_keeps_positions() {
        let quad = Quad::from_fn(|q| q).map(Quadrant::index);
        for quadrant in Quadrant::ALL {
            assert_eq!(quad[quadrant], quadrant.index());
        }
    }
}
