use incunabulum::lang::{Error, ErrorCode};
use incunabulum::mach::Runtime;

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime, s: &str) -> String {
    runtime.interpret(s)
}

#[allow(dead_code)]
pub fn exec_err(runtime: &mut Runtime, s: &str) -> Error {
    match runtime.evaluate_str(s) {
        Ok(array) => panic!("{:?} evaluated to {:?}", s, array),
        Err(error) => error,
    }
}

#[allow(dead_code)]
pub fn assert_code(runtime: &mut Runtime, s: &str, code: ErrorCode) {
    let error = exec_err(runtime, s);
    assert!(error.is(code), "{:?} failed with {}", s, error);
}
