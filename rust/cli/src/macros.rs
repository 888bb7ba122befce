/// Writes a line to `$dest`, returning [`crate::exit_code::ERROR`] from the
/// enclosing function if the stream is broken.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
