//! [`all`](super::all) over fixed tuples of differently typed outcomes.
//!
//! Every element of the tuple shares one error type `E`. Elements that fail
//! with different error types must be brought to a common type with
//! [`Outcome::map_err`] before they are combined.

use crate::outcome::Outcome;

/// A tuple of outcomes that can be combined into an outcome of a tuple.
///
/// Implemented for tuples of one to eight outcomes sharing an error type.
pub trait AllTuple {
    /// The tuple of success payloads.
    type Output;
    /// The shared error type.
    type Error;

    /// Returns every success payload, or the failure of the leftmost failing element.
    fn all(self) -> Outcome<Self::Output, Self::Error>;
}

/// Combines a tuple of outcomes into an outcome of a tuple.
///
/// # Examples
///
/// ```rust
/// use railway::collect::all_tuple;
/// use railway::outcome::Outcome;
///
/// let name: Outcome<String, &str> = Outcome::Ok("ada".to_string());
/// let age: Outcome<u8, &str> = Outcome::Ok(36);
/// assert_eq!(all_tuple((name, age)), Outcome::Ok(("ada".to_string(), 36)));
///
/// let name: Outcome<String, &str> = Outcome::Err("name missing");
/// let age: Outcome<u8, &str> = Outcome::Err("age missing");
/// assert_eq!(all_tuple((name, age)), Outcome::Err("name missing"));
/// ```
pub fn all_tuple<Tuple>(outcomes: Tuple) -> Outcome<Tuple::Output, Tuple::Error>
where
    Tuple: AllTuple,
{
    outcomes.all()
}

macro_rules! impl_all_tuple {
    ($($element:ident),+) => {
        paste::paste! {
            impl<E, $($element),+> AllTuple for ($(Outcome<$element, E>,)+) {
                type Output = ($($element,)+);
                type Error = E;

                fn all(self) -> Outcome<Self::Output, E> {
                    let ($([<$element:lower _outcome>],)+) = self;
                    $(
                        let [<$element:lower _value>] = match [<$element:lower _outcome>] {
                            Outcome::Ok(value) => value,
                            Outcome::Err(error) => return Outcome::Err(error),
                        };
                    )+
                    Outcome::Ok(($([<$element:lower _value>],)+))
                }
            }
        }
    };
}

impl_all_tuple!(T1);
impl_all_tuple!(T1, T2);
impl_all_tuple!(T1, T2, T3);
impl_all_tuple!(T1, T2, T3, T4);
impl_all_tuple!(T1, T2, T3, T4, T5);
impl_all_tuple!(T1, T2, T3, T4, T5, T6);
impl_all_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_all_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
