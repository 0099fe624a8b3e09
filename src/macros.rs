// src/macros.rs
//! Shorthands used throughout the crate.

/// `s!()` is an empty `String`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($expr:expr) => { ::std::string::String::from($expr) };
}

/// Concatenate string slices into a fresh `String`: `join!("</", name)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}

/// Forward one call to an optional `Progress` reporter:
/// `notify!(progress, stage_done("extract"))`.
#[macro_export]
macro_rules! notify {
    ($progress:ident, $method:ident($($arg:expr),* $(,)?)) => {
        if let Some(p) = $progress.as_deref_mut() {
            p.$method($($arg),*);
        }
    };
}
