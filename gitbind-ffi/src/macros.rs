/// Generate pass-through wrappers that normalize a libgit2 return code
///
/// Each entry names the wrapper, its argument list (identical to the native
/// call) and the call expression. Native calls returning a count or a boolean
/// cast it to `c_int` in the expression.
macro_rules! delegate {
    ($(
        $(#[$attr:meta])*
        pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) => $call:expr;
    )*) => {
        $(
            $(#[$attr])*
            ///
            /// # Safety
            ///
            /// Pointer arguments must satisfy the contract of the wrapped
            /// libgit2 function.
            pub unsafe fn $name($($arg: $ty),*) -> $crate::result::GitResult {
                $crate::result::wrap_result(unsafe { $call })
            }
        )*
    };
}
