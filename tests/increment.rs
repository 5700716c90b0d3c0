use newtype::{Increment, NewType};

enum MyIntTag {}
type MyInt = NewType<i32, MyIntTag>;

#[test]
fn increment_and_decrement() {
    let mut value = MyInt::new(3);
    assert_eq!(*value.increment(), MyInt::new(4));
    assert_eq!(value.post_increment(), MyInt::new(4));
    assert_eq!(value, MyInt::new(5));
    assert_eq!(*value.decrement(), MyInt::new(4));
    assert_eq!(value.post_decrement(), MyInt::new(4));
    assert_eq!(value, MyInt::new(3));
}

#[test]
fn prefix_returns_the_wrapper_itself() {
    let mut value = MyInt::new(0);
    value.increment().increment().increment().decrement();
    assert_eq!(value.into_inner(), 2);
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn overflows_like_underlying() {
    let mut value = NewType::<u8, MyIntTag>::new(u8::MAX);
    value.increment();
    let mut raw = u8::MAX;
    raw.increment();
    assert_eq!(value.into_inner(), raw);
}

#[derive(Clone, Debug, PartialEq)]
struct Version {
    major: u32,
    minor: u32,
}

impl Increment for Version {
    fn increment(&mut self) {
        self.minor += 1;
    }

    fn decrement(&mut self) {
        self.minor -= 1;
    }
}

enum ReleaseTag {}
type Release = NewType<Version, ReleaseTag>;

#[test]
fn user_defined_step() {
    let mut release = Release::new(Version { major: 1, minor: 0 });
    let before = release.post_increment();
    assert_eq!((before.get().major, before.get().minor), (1, 0));
    assert_eq!(release.get(), &Version { major: 1, minor: 1 });
}
