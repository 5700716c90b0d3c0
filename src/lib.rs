//! ```
//! use newtype::new_type;
//!
//! new_type!(FirstName, String);
//! new_type!(LastName, String);
//! new_type!(FullName, String);
//!
//! fn make_full_name(first: &FirstName, last: &LastName) -> FullName {
//!     FullName::new(format!("{} {}", first.get(), last.get()))
//! }
//!
//! let name = make_full_name(
//!     &FirstName::new("John".to_owned()),
//!     &LastName::new("Cage".to_owned()),
//! );
//! assert_eq!(name.get(), "John Cage");
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum FirstNameTag {}
//! # enum LastNameTag {}
//! # type FirstName = NewType<String, FirstNameTag>;
//! # type LastName = NewType<String, LastNameTag>;
//! fn greet(first: FirstName, last: LastName) {}
//!
//! greet(LastName::new("Cage".into()), FirstName::new("John".into()));
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum FirstNameTag {}
//! # type FirstName = NewType<String, FirstNameTag>;
//! fn greet(first: FirstName) {}
//!
//! greet(String::from("John"));
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum LastNameTag {}
//! # type LastName = NewType<String, LastNameTag>;
//! let name: String = LastName::new("Cage".into());
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum LastNameTag {}
//! # type LastName = NewType<String, LastNameTag>;
//! let name: LastName = String::from("Cage").into();
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum AppleTag {}
//! # enum PearTag {}
//! let same = NewType::<u32, AppleTag>::new(1) == NewType::<u32, PearTag>::new(1);
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum AppleTag {}
//! let same = NewType::<u32, AppleTag>::new(1) < 2;
//! ```
//!
//! ```compile_fail
//! # use newtype::NewType;
//! # enum NameTag {}
//! let mut name = NewType::<String, NameTag>::new(String::new());
//! name.increment();
//! ```
//!
//! Declared with the macros, the same mistakes are rejected:
//!
//! ```compile_fail
//! newtype::new_type!(Length, i32);
//! newtype::new_type!(Area, i32);
//!
//! fn area(x: Length, y: Length) -> Area {
//!     Area::new(x.get() * y.get())
//! }
//!
//! area(Area::new(1), Length::new(2));
//! ```
//!
//! ```compile_fail
//! newtype::new_type!(Length, i32);
//! newtype::new_type!(Area, i32);
//!
//! let same = Length::new(3) == Area::new(3);
//! ```
//!
//! ```compile_fail
//! #[newtype::define(x)]
//! type Length = i32;
//! ```
#![cfg_attr(
    not(feature = "deref"),
    doc = r#"
```compile_fail
# use newtype::NewType;
# enum LastNameTag {}
# type LastName = NewType<String, LastNameTag>;
fn shout(name: &String) {}

shout(&LastName::new("Cage".into()));
```

```compile_fail
# use newtype::NewType;
# enum LastNameTag {}
# type LastName = NewType<String, LastNameTag>;
fn shout(name: &str) {}

shout(&LastName::new("Cage".into()));
```
"#
)]
#![no_std]

mod increment;
mod new_type;

pub use increment::Increment;
pub use new_type::NewType;

#[cfg(feature = "macros")]
#[doc(inline)]
pub use newtype_impl::*;
