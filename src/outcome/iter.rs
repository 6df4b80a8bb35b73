use crate::outcome::core::Outcome;
use crate::types::Error;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Outcome<T> {
    /// Iterates over the payload: one item for a payload-carrying success,
    /// none otherwise.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    /// Iterates over the attached errors in insertion order; empty for a
    /// success.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, Error> {
        match self {
            Outcome::Success(_) => [].iter(),
            Outcome::Failure(errors) => errors.iter(),
        }
    }
}
