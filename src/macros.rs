// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! or_na {
    // Option<String> → value, or the "N/A" sentinel
    ($opt:expr) => {
        $opt.unwrap_or_else(|| $crate::s!($crate::config::consts::NA))
    };
}
