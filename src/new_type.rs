use crate::Increment;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A `T` that only mixes with other values of the same `Tag`.
///
/// ```
/// use newtype::NewType;
///
/// enum MyIntTag {}
/// type MyInt = NewType<i32, MyIntTag>;
///
/// let mut value = MyInt::new(3);
/// assert_eq!(*value.increment(), MyInt::new(4));
/// assert_eq!(value.post_increment(), MyInt::new(4));
/// assert_eq!(value, MyInt::new(5));
/// assert!(MyInt::new(1) < MyInt::new(2));
/// ```
#[repr(transparent)]
pub struct NewType<T, Tag> {
    value: T,
    tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> NewType<T, Tag> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    #[inline]
    pub fn to_inner(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Transforms the value while keeping the tag.
    pub fn map_inner(self, f: impl FnOnce(T) -> T) -> Self {
        Self::new(f(self.value))
    }

    /// Stores `value` and returns the previous one.
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }
}

impl<T: Increment, Tag> NewType<T, Tag> {
    /// Prefix increment.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.value.increment();
        self
    }

    /// Postfix increment, returning the prior state.
    pub fn post_increment(&mut self) -> Self
    where
        T: Clone,
    {
        let old = self.clone();
        self.increment();
        old
    }

    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.value.decrement();
        self
    }

    pub fn post_decrement(&mut self) -> Self
    where
        T: Clone,
    {
        let old = self.clone();
        self.decrement();
        old
    }
}

impl<T: Default, Tag> Default for NewType<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone, Tag> Clone for NewType<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for NewType<T, Tag> {}

impl<T: fmt::Debug, Tag> fmt::Debug for NewType<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NewType").field(&self.value).finish()
    }
}

/// Opt-in through the `deref` feature. Deref coercion then lets `&NewType<T, _>`
/// stand in for `&T`, which `get` never does.
#[cfg(feature = "deref")]
impl<T, Tag> core::ops::Deref for NewType<T, Tag> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

#[cfg(feature = "deref")]
impl<T, Tag> core::ops::DerefMut for NewType<T, Tag> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

// Comparisons only ever take `Rhs = Self`: same `T`, same `Tag`.

impl<T: PartialEq, Tag> PartialEq for NewType<T, Tag> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &Self) -> bool {
        self.value != other.value
    }
}

impl<T: Eq, Tag> Eq for NewType<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for NewType<T, Tag> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.value < other.value
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.value <= other.value
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.value > other.value
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.value >= other.value
    }
}

impl<T: Ord, Tag> Ord for NewType<T, Tag> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    enum MeterTag {}
    type Meters = NewType<u64, MeterTag>;

    #[test]
    fn tag_has_no_footprint() {
        assert_eq!(size_of::<Meters>(), size_of::<u64>());
        assert_eq!(align_of::<Meters>(), align_of::<u64>());
    }

    #[test]
    fn default_is_underlying_default() {
        assert_eq!(Meters::default().into_inner(), 0);
    }

    #[test]
    fn replace_and_map_keep_tag() {
        let mut meters = Meters::new(7);
        assert_eq!(meters.replace(9), 7);
        assert_eq!(meters.map_inner(|m| m * 2), Meters::new(18));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut meters = Meters::new(1);
        *meters.get_mut() += 41;
        assert_eq!(*meters.get(), 42);
    }
}
