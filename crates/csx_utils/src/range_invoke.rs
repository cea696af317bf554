/// Invokes `$macro` once per arity from `0` up to the given number.
///
/// Each call receives the arity and the indexed parameter list; the
/// number cannot exceed `12`.
///
/// # Example
///
/// ```ignore
/// range_invoke!(my_macro, 2);
/// // expands to
/// my_macro!(0: []);
/// my_macro!(1: [0: P0]);
/// my_macro!(2: [0: P0, 1: P1]);
/// ```
#[macro_export]
macro_rules! range_invoke {
    ($(#[$meta:meta])* $macro:ident, 0) => {
        $(#[$meta])* $macro!(0: []);
    };
    ($(#[$meta:meta])* $macro:ident, 1) => {
        $crate::range_invoke!($(#[$meta])* $macro, 0);
        $(#[$meta])* $macro!(1: [0: P0]);
    };
    ($(#[$meta:meta])* $macro:ident, 2) => {
        $crate::range_invoke!($(#[$meta])* $macro, 1);
        $(#[$meta])* $macro!(2: [0: P0, 1: P1]);
    };
    ($(#[$meta:meta])* $macro:ident, 3) => {
        $crate::range_invoke!($(#[$meta])* $macro, 2);
        $(#[$meta])* $macro!(3: [0: P0, 1: P1, 2: P2]);
    };
    ($(#[$meta:meta])* $macro:ident, 4) => {
        $crate::range_invoke!($(#[$meta])* $macro, 3);
        $(#[$meta])* $macro!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
    };
    ($(#[$meta:meta])* $macro:ident, 5) => {
        $crate::range_invoke!($(#[$meta])* $macro, 4);
        $(#[$meta])* $macro!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
    };
    ($(#[$meta:meta])* $macro:ident, 6) => {
        $crate::range_invoke!($(#[$meta])* $macro, 5);
        $(#[$meta])* $macro!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);
    };
    ($(#[$meta:meta])* $macro:ident, 7) => {
        $crate::range_invoke!($(#[$meta])* $macro, 6);
        $(#[$meta])* $macro!(7: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6]);
    };
    ($(#[$meta:meta])* $macro:ident, 8) => {
        $crate::range_invoke!($(#[$meta])* $macro, 7);
        $(#[$meta])* $macro!(8: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7]);
    };
    ($(#[$meta:meta])* $macro:ident, 9) => {
        $crate::range_invoke!($(#[$meta])* $macro, 8);
        $(#[$meta])* $macro!(9: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8]);
    };
    ($(#[$meta:meta])* $macro:ident, 10) => {
        $crate::range_invoke!($(#[$meta])* $macro, 9);
        $(#[$meta])* $macro!(10: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9]);
    };
    ($(#[$meta:meta])* $macro:ident, 11) => {
        $crate::range_invoke!($(#[$meta])* $macro, 10);
        $(#[$meta])* $macro!(11: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10]);
    };
    ($(#[$meta:meta])* $macro:ident, 12) => {
        $crate::range_invoke!($(#[$meta])* $macro, 11);
        $(#[$meta])* $macro!(12: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10, 11: P11]);
    };
}
