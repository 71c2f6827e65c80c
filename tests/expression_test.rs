mod common;
use common::*;
use incunabulum::mach::Runtime;

#[test]
fn test_right_to_left() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "2+2"), "\n4\n");
    assert_eq!(exec(&mut r, "1+1+1"), "\n3\n");
    assert_eq!(exec(&mut r, "x=2#3"), "2\n3 3\n");
    assert_eq!(exec(&mut r, "x+2#4"), "2\n7 7\n");
}

#[test]
fn test_iota() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "i.5"), "5\n0 1 2 3 4\n");
    assert_eq!(exec(&mut r, "~5"), "5\n0 1 2 3 4\n");
    for n in 0..10 {
        let data: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        assert_eq!(
            exec(&mut r, &format!("i.{}", n)),
            format!("{}\n{}\n", n, data.join(" "))
        );
    }
}

#[test]
fn test_whitespace_is_ignored() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, " 1 + 2 "), "\n3\n");
    assert_eq!(exec(&mut r, "i. 3"), "3\n0 1 2\n");
}

#[test]
fn test_assignment() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "x=3"), "\n3\n");
    assert_eq!(exec(&mut r, "x"), "\n3\n");
    assert_eq!(exec(&mut r, "x=5"), exec(&mut Runtime::default(), "5"));
    assert_eq!(exec(&mut r, "x"), exec(&mut Runtime::default(), "5"));
    assert_eq!(exec(&mut r, "x=y=4"), "\n4\n");
    assert_eq!(exec(&mut r, "x+y"), "\n8\n");
}

#[test]
fn test_sessions_are_isolated() {
    let mut a = Runtime::default();
    let mut b = Runtime::default();
    exec(&mut a, "x=1");
    assert_eq!(exec(&mut a, "x"), "\n1\n");
    assert!(exec(&mut b, "x").starts_with("Error: unbound variable"));
    assert!(incunabulum::interpret("x").starts_with("Error: "));
}

#[test]
fn test_from_then_shape() {
    let mut r = Runtime::default();
    exec(&mut r, "s=2,3");
    exec(&mut r, "m=s#i.6");
    for i in 0..2 {
        assert_eq!(exec(&mut r, &format!("#{}{{m", i)), "1\n3\n");
    }
    exec(&mut r, "s=3,2");
    exec(&mut r, "m=s#i.6");
    for i in 0..3 {
        assert_eq!(exec(&mut r, &format!("#{}{{m", i)), "1\n2\n");
    }
    assert_eq!(exec(&mut r, "2{m"), "2\n4 5\n");
}

#[test]
fn test_box_render() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "<i.3"), "\n< 3\n0 1 2\n\n");
    exec(&mut r, "x=i.3");
    let a = exec(&mut r, "a=<x");
    let b = exec(&mut r, "b=<x");
    assert_eq!(a, b);
    assert_eq!(a.matches("< ").count(), 1);
}

#[test]
fn test_concatenate_shape() {
    let mut r = Runtime::default();
    exec(&mut r, "s=2,2");
    exec(&mut r, "m=s#i.4");
    assert_eq!(exec(&mut r, "#m,i.3"), "1\n7\n");
    assert_eq!(exec(&mut r, "#5,m"), "1\n5\n");
    assert_eq!(exec(&mut r, "m,m"), "8\n0 1 2 3 0 1 2 3\n");
}
