//! Per-face storage.

use crate::CubeFace;

/// One optional value per cube face, iterated in [`CubeFace::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeMap<T> {
    slots: [Option<T>; 6],
}

impl<T> CubeMap<T> {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None, None, None, None, None, None],
        }
    }

    /// Store `value` for `face`, returning the previous value.
    pub fn insert(&mut self, face: CubeFace, value: T) -> Option<T> {
        self.slots[face.index()].replace(value)
    }

    #[must_use]
    pub fn get(&self, face: CubeFace) -> Option<&T> {
        self.slots[face.index()].as_ref()
    }

    /// Number of faces that hold a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Faces that hold a value, in canonical face order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &T)> {
        CubeFace::ALL
            .into_iter()
            .filter_map(|face| self.get(face).map(|v| (face, v)))
    }

    /// Faces that are still empty.
    pub fn missing(&self) -> impl Iterator<Item = CubeFace> + '_ {
        CubeFace::ALL
            .into_iter()
            .filter(|face| self.get(*face).is_none())
    }

    /// Borrow every stored value.
    #[must_use]
    pub fn borrowed(&self) -> CubeMap<&T> {
        CubeMap {
            slots: self.slots.each_ref().map(Option::as_ref),
        }
    }
}

impl<T> Default for CubeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(CubeFace, T)> for CubeMap<T> {
    fn from_iter<I: IntoIterator<Item = (CubeFace, T)>>(iter: I) -> Self {
        let mut map = CubeMap::new();
        for (face, value) in iter {
            map.insert(face, value);
        }
        map
    }
}
