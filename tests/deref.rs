#![cfg(feature = "deref")]

use newtype::NewType;

enum FirstNameTag {}
type FirstName = NewType<String, FirstNameTag>;

struct Point {
    x: i32,
    y: i32,
}

enum OriginTag {}
type Origin = NewType<Point, OriginTag>;

#[test]
fn dereference() {
    let name = FirstName::new("John".to_owned());
    assert_eq!(*name, "John");

    let mut name = name;
    *name = "Jane".to_owned();
    assert_eq!(name.get(), "Jane");
}

#[test]
fn member_access() {
    let mut name = FirstName::new("John".to_owned());
    assert_eq!(name.len(), 4);
    name.push('!');
    assert_eq!(name.get(), "John!");

    let mut origin = Origin::new(Point { x: 1, y: 2 });
    origin.x += 10;
    assert_eq!((origin.x, origin.y), (11, 2));
}
