use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::BitXor;

/// A fixed-width integer that can be folded with XOR.
///
/// `Hash + Eq` are only needed by the validated lookup, which counts
/// occurrences. `Display` is used to render offending values in errors.
pub trait XorElement: Copy + Eq + Hash + Debug + Display + BitXor<Output = Self> {
    /// The XOR identity.
    const ZERO: Self;
}

macro_rules! impl_xor_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl XorElement for $t {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_xor_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
