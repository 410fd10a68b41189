//! Reading pairs from whitespace separated text.

use std::{
    iter::{Filter, FusedIterator},
    num::IntErrorKind,
    slice::Split,
    str,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

type Tokens<'a> = Filter<Split<'a, u8, fn(&u8) -> bool>, fn(&&'a [u8]) -> bool>;

fn tokens(bytes: &[u8]) -> Tokens<'_> {
    fn not_empty(token: &&[u8]) -> bool {
        !token.is_empty()
    }

    bytes
        .split(u8::is_ascii_whitespace as fn(&u8) -> bool)
        .filter(not_empty as fn(&&[u8]) -> bool)
}

/// An iterator over the integer pairs of a text.
///
/// Tokens are separated by any ASCII whitespace, line breaks carry no meaning.
/// The text does not have to be UTF-8: iteration ends at the end of the text, at a token
/// that is not an integer (invalid UTF-8 included), or at a single trailing integer
/// without a partner.
///
/// An integer too large for an `i64` saturates to `i64::MAX` or `i64::MIN`,
/// so it is still out of range for any universe rather than ending the stream.
///
/// # Examples
///
/// ```
/// use connectivity::input::Pairs;
///
/// let pairs: Vec<_> = Pairs::new("4 3\n3 8 6\n5 x 9 4").collect();
///
/// assert_eq!(pairs, vec![(4, 3), (3, 8), (6, 5)]);
/// ```
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    tokens: Tokens<'a>,
    done: bool,
}

impl<'a> Pairs<'a> {
    pub fn new<T>(text: &'a T) -> Self where T: AsRef<[u8]> + ?Sized {
        Self {
            tokens: tokens(text.as_ref()),
            done: false,
        }
    }

    fn integer(&mut self) -> Option<i64> {
        let token = str::from_utf8(self.tokens.next()?).ok()?;

        match token.parse::<i64>() {
            Ok(value) => Some(value),
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        }
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None
        }

        let pair = self.integer().and_then(|p| Some((p, self.integer()?)));

        if pair.is_none() {
            self.done = true;
        }

        pair
    }
}

impl<'a> FusedIterator for Pairs<'a> {}

/// Reads the universe size from the first token and returns it with the pairs that follow.
///
/// Returns `None` if the first token is missing or is not a non-negative integer
/// that fits in a `usize`.
///
/// # Examples
///
/// ```
/// use connectivity::input::split_len;
///
/// let (len, pairs) = split_len("10\n4 3\n3 8\n").unwrap();
///
/// assert_eq!(len, 10);
/// assert_eq!(pairs.collect::<Vec<_>>(), vec![(4, 3), (3, 8)]);
/// assert!(split_len("-1 0 0").is_none());
/// ```
pub fn split_len<T>(text: &T) -> Option<(usize, Pairs<'_>)> where T: AsRef<[u8]> + ?Sized {
    let mut tokens = tokens(text.as_ref());
    let len = str::from_utf8(tokens.next()?).ok()?.parse().ok()?;

    Some((len, Pairs { tokens, done: false }))
}

/// A universe size together with pairs of elements inside it.
///
/// With the `proptest` feature this implements `Arbitrary`, which makes it a ready made
/// input for property tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairStream {
    pub len: usize,
    pub pairs: Vec<(usize, usize)>,
}

impl PairStream {
    /// Returns the pairs in the form `run` consumes.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.pairs.iter().map(|&(p, q)| (p as i64, q as i64))
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for PairStream {
    /// The range of universe sizes and of the amount of pairs.
    type Parameters = (std::ops::Range<usize>, proptest::collection::SizeRange);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (lens, size_range) = params;
        // An empty universe admits no pairs.
        let lens = lens.start.max(1) .. lens.end.max(2);

        lens.prop_flat_map(move |len| {
            let pair = (0 .. len, 0 .. len);

            proptest::collection::vec(pair, size_range.clone())
                .prop_map(move |pairs| PairStream { len, pairs })
        }).boxed()
    }
}
