use crate::error::{Error, Result};

/// An iterator over the zero or one values of an [`Optional`].
pub type Iter<'a, T> = std::option::IntoIter<&'a T>;

/// A value holder that is either present or absent.
///
/// All absent instances of the same `T` are equal and hash equally. A present
/// instance compares and hashes through its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Optional<T> {
    #[default]
    Absent,
    Present(T),
}

// presence is encoded in the niche of the value where one exists
static_assertions::assert_eq_size!(Optional<&u8>, &u8);
static_assertions::assert_eq_size!(Optional<Box<u64>>, Option<Box<u64>>);

impl<T> Optional<T> {
    /// Classify a possibly missing value: `None` becomes absent.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    #[inline]
    pub fn absent() -> Self {
        Optional::Absent
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Access the value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::AbsentValue`] if the optional is absent.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("{}", Error::AbsentValue),
        }
    }

    /// Access the value, or get [`Error::AbsentValue`].
    pub fn try_get(&self) -> Result<&T> {
        self.or_null().ok_or(Error::AbsentValue)
    }

    /// Take the value out.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::AbsentValue`] if the optional is absent.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("{}", Error::AbsentValue),
        }
    }

    /// The value as a nullable reference.
    #[inline]
    pub fn or_null(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// The value, or `default` if absent.
    #[inline]
    pub fn or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// The value, or the result of `supplier` if absent.
    ///
    /// The supplier is not called for a present optional.
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => supplier(),
        }
    }

    /// Transform a present value. `f` is never called for an absent optional.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keep a present value only if it matches `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) if predicate(&value) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    /// Run `action` once with the value if present.
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(value) = self {
            action(value)
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional::of(self.or_null())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.or_null().into_iter()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// serialized the same way as the equivalent Option
#[cfg(feature = "serde")]
impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.or_null().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::of)
    }
}
