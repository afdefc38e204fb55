// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`!] macro, which prints a colored diff of
/// the left and right values when they don't match.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Runs the given block only when the condition is true. Used to gate verbose debug
/// output behind a `const` flag.
///
/// ```
/// use r3bl_string_ext::call_if_true;
///
/// const DEBUG: bool = true;
/// let mut count = 0;
/// call_if_true!(DEBUG, { count += 1; });
/// assert_eq!(count, 1);
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:expr, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}
