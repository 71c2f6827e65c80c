mod common;
use common::*;
use incunabulum::mach::Runtime;

#[test]
fn test_identity() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "+5"), "\n5\n");
    assert_eq!(exec(&mut r, "+i.2"), "2\n0 1\n");
}

#[test]
fn test_size() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "{i.4"), "\n4\n");
    assert_eq!(exec(&mut r, "{5"), "\n1\n");
    exec(&mut r, "s=3,2");
    assert_eq!(exec(&mut r, "{s#1"), "\n3\n");
}

#[test]
fn test_shape() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "#5"), "0\n\n");
    assert_eq!(exec(&mut r, "#i.4"), "1\n4\n");
    assert_eq!(exec(&mut r, "##5"), "1\n0\n");
}

#[test]
fn test_plus() {
    let mut r = Runtime::default();
    exec(&mut r, "x=i.3");
    assert_eq!(exec(&mut r, "x+x"), "3\n0 2 4\n");
    assert_eq!(exec(&mut r, "9+9"), "\n18\n");
}

#[test]
fn test_from() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "2{i.5"), "\n2\n");
    exec(&mut r, "p=<i.2");
    exec(&mut r, "q=<5");
    assert_eq!(exec(&mut r, "z=p,q"), "2\n< 2\n0 1\n< \n5\n\n");
    assert_eq!(exec(&mut r, "1{z"), "\n< \n5\n\n");
}

#[test]
fn test_reshape() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "4#i.3"), "4\n0 1 2 0\n");
    assert_eq!(exec(&mut r, "2#i.5"), "2\n0 1\n");
    assert_eq!(exec(&mut r, "0#i.3"), "0\n\n");
    exec(&mut r, "s=2,3");
    assert_eq!(exec(&mut r, "s#i.4"), "2 3\n0 1 2 3 0 1\n");
    exec(&mut r, "s=2,2,2");
    assert_eq!(exec(&mut r, "s#1"), "2 2 2\n1 1 1 1 1 1 1 1\n");
    assert_eq!(exec(&mut r, "3#<5"), "3\n< \n5\n< \n5\n< \n5\n\n");
}

#[test]
fn test_concatenate() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "1,2"), "2\n1 2\n");
    exec(&mut r, "x=i.2");
    assert_eq!(exec(&mut r, "x,x"), "4\n0 1 0 1\n");
    assert_eq!(exec(&mut r, "1,2,3"), "3\n1 2 3\n");
}

#[test]
fn test_concatenate_empty_with_boxes() {
    let mut r = Runtime::default();
    exec(&mut r, "e=0#1");
    assert_eq!(exec(&mut r, "e,<5"), "1\n< \n5\n\n");
    exec(&mut r, "b=<5");
    assert_eq!(exec(&mut r, "b,e"), "1\n< \n5\n\n");
    assert_eq!(exec(&mut r, "e,e"), "0\n\n");
}
