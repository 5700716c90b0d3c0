/// Types with a unit step, the capability behind
/// [`NewType::increment`](crate::NewType::increment) and friends.
///
/// Implementations must behave exactly like the type's own `+= 1` and `-= 1`,
/// overflow included.
pub trait Increment {
    fn increment(&mut self);
    fn decrement(&mut self);
}

macro_rules! impl_increment {
    ($one:literal => $($ty:ty),* $(,)?) => {$(
        impl Increment for $ty {
            #[inline]
            fn increment(&mut self) {
                *self += $one;
            }

            #[inline]
            fn decrement(&mut self) {
                *self -= $one;
            }
        }
    )*};
}

impl_increment!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_increment!(1.0 => f32, f64);
