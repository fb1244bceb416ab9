/// Binary entrypoint for the `raffler` executable.
///
/// Keeps the binary thin: all business logic lives in the `raffler_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    raffler_lib::run();
}
