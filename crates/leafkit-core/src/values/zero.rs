//! The [`IsZero`] capability and its std implementations.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A type with a well-defined "empty" value.
///
/// | Category | Zero iff |
/// |---|---|
/// | `()`, `PhantomData` | always |
/// | strings, paths | length is 0 |
/// | integers | `0` |
/// | floats | `0.0` (`-0.0` included, NaN excluded) |
/// | `bool` | `false` |
/// | `char` | `'\0'` |
/// | `Option<T>` | `None`, or the contained value is zero |
/// | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Cow<T>` | the pointee is zero |
/// | `Vec`, slices, maps, sets | no elements |
/// | tuples, fixed arrays | every element is zero |
///
/// Implementations must not mutate and must be consistent: the same value
/// always gives the same answer.
pub trait IsZero {
    /// Returns `true` if `self` is the zero value of its type.
    fn is_zero(&self) -> bool;
}

/// Equality with `T::default()`.
///
/// Meant for fieldless enums and opaque leaf types. For a struct it can
/// disagree with the field-wise rule: `Some(String::new())` is zero as a
/// field but differs from a default `None`. Structs use
/// [`impl_is_zero_fields!`](crate::impl_is_zero_fields).
///
/// ```
/// use leafkit_core::values::is_default;
///
/// #[derive(Default, PartialEq)]
/// enum Mode { #[default] Auto, Manual }
///
/// assert!(is_default(&Mode::Auto));
/// assert!(!is_default(&Mode::Manual));
/// ```
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Implement [`IsZero`] for fieldless enums and opaque leaf types by
/// comparing against `Default::default()`.
///
/// The types must implement `Default + PartialEq`. Do not use it for structs
/// with fields; [`impl_is_zero_fields!`](crate::impl_is_zero_fields) is the
/// struct rule, and the two differ when a field is zero without being its
/// default (`Some(0)`, `Some("")`).
///
/// ```
/// use leafkit_core::impl_is_zero_via_default;
/// use leafkit_core::values::IsZero;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Level { #[default] Off, Low, High }
///
/// impl_is_zero_via_default!(Level);
///
/// assert!(Level::Off.is_zero());
/// assert!(!Level::High.is_zero());
/// ```
#[macro_export]
macro_rules! impl_is_zero_via_default {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::values::IsZero for $t {
                fn is_zero(&self) -> bool {
                    $crate::values::is_default(self)
                }
            }
        )+
    };
}

/// Implement [`IsZero`] for a struct field by field.
///
/// The struct is zero iff every listed field is zero. Fields are checked
/// through their own `IsZero` impls, so nested structs recurse. Tuple
/// structs list indices (`Wrapper { 0 }`).
///
/// ```
/// use leafkit_core::impl_is_zero_fields;
/// use leafkit_core::values::IsZero;
///
/// struct Endpoint { host: String, port: u16 }
/// impl_is_zero_fields!(Endpoint { host, port });
///
/// assert!(Endpoint { host: String::new(), port: 0 }.is_zero());
/// assert!(!Endpoint { host: String::new(), port: 80 }.is_zero());
/// ```
#[macro_export]
macro_rules! impl_is_zero_fields {
    ($t:ty { $($field:tt),* $(,)? }) => {
        impl $crate::values::IsZero for $t {
            fn is_zero(&self) -> bool {
                true $(&& $crate::values::IsZero::is_zero(&self.$field))*
            }
        }
    };
}

/// Select the first non-zero candidate, evaluating candidates lazily.
///
/// Each expression is evaluated only if every candidate before it was zero.
/// With no match the result is `Default::default()`.
///
/// ```
/// use std::cell::Cell;
/// use leafkit_core::pick_first;
///
/// let lookups = Cell::new(0);
/// let load_from_disk = || {
///     lookups.set(lookups.get() + 1);
///     "from-disk".to_string()
/// };
///
/// let from_flag = String::new();
/// let picked: String = pick_first!(from_flag, "from-env".to_string(), load_from_disk());
/// assert_eq!(picked, "from-env");
/// assert_eq!(lookups.get(), 0);
/// ```
#[macro_export]
macro_rules! pick_first {
    () => {
        ::core::default::Default::default()
    };
    ($($candidate:expr),+ $(,)?) => {
        'pick: {
            $(
                let candidate = $candidate;
                if !$crate::values::IsZero::is_zero(&candidate) {
                    break 'pick candidate;
                }
            )+
            ::core::default::Default::default()
        }
    };
}

macro_rules! impl_is_zero_int {
    ($($t:ty),*) => {
        $(
            impl IsZero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

macro_rules! impl_is_zero_float {
    ($($t:ty),*) => {
        $(
            impl IsZero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_is_zero_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_is_zero_float!(f32, f64);

impl IsZero for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl IsZero for () {
    #[inline]
    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: ?Sized> IsZero for PhantomData<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        true
    }
}

impl IsZero for str {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for OsStr {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for OsString {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for Path {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl IsZero for PathBuf {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl IsZero for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

// ----------------------------------------------------------------------------
// Optional and pointer-like values
// ----------------------------------------------------------------------------

impl<T: IsZero> IsZero for Option<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_zero(),
        }
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    #[inline]
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for &mut T {
    #[inline]
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Rc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Arc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<B> IsZero for Cow<'_, B>
where
    B: IsZero + ToOwned + ?Sized,
{
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// ----------------------------------------------------------------------------
// Collections: zero iff empty
// ----------------------------------------------------------------------------

impl<T> IsZero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for VecDeque<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for LinkedList<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsZero for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Fixed-shape composites: zero iff every element is zero
// ----------------------------------------------------------------------------

impl<T: IsZero, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(IsZero::is_zero)
    }
}

macro_rules! impl_is_zero_tuple {
    ($(($($name:ident . $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: IsZero),+> IsZero for ($($name,)+) {
                fn is_zero(&self) -> bool {
                    true $(&& self.$idx.is_zero())+
                }
            }
        )+
    };
}

impl_is_zero_tuple!(
    (A.0),
    (A.0, B.1),
    (A.0, B.1, C.2),
    (A.0, B.1, C.2, D.3),
    (A.0, B.1, C.2, D.3, E.4),
    (A.0, B.1, C.2, D.3, E.4, F.5),
);

// ----------------------------------------------------------------------------
// Raw JSON configuration values
// ----------------------------------------------------------------------------

impl IsZero for serde_json::Value {
    fn is_zero(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}
