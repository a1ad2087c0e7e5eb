use crate::element::XorElement;

/// Running XOR over values that arrive one at a time.
///
/// Gives the same answer as [`crate::find_single`] over everything pushed so
/// far, without needing the whole input in a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorAccumulator<T: XorElement> {
    value: T,
    count: usize,
}

impl<T: XorElement> XorAccumulator<T> {
    pub fn new() -> Self {
        Self {
            value: T::ZERO,
            count: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        self.value = self.value ^ value;
        self.count += 1;
    }

    /// Number of values absorbed so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current XOR of everything pushed; zero before the first push.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn finish(self) -> T {
        self.value
    }
}

impl<T: XorElement> Default for XorAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: XorElement> Extend<T> for XorAccumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: XorElement> Extend<&'a T> for XorAccumulator<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: XorElement> FromIterator<T> for XorAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
