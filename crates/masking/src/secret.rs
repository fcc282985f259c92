//!
//! Structure describing secret.
//!

use std::{fmt, marker::PhantomData, str::FromStr};

use crate::{strategy::Strategy, PeekInterface};

/// Secret thing.
///
/// To get access to the value use method `expose()` of trait
/// [`crate::ExposeInterface`], or `peek()` of [`crate::PeekInterface`] for a
/// reference.
///
/// ## Masking
/// Use the [`crate::strategy::Strategy`] trait to implement a masking
/// strategy on a unit struct and pass it as the second generic parameter to
/// [`Secret`]. [`Secret`] will take care of applying the masking strategy on
/// the inner secret when being displayed.
pub struct Secret<S, I = crate::WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }

    /// Convert to a secret with a different masking strategy
    pub fn switch_strategy<J>(self) -> Secret<S, J>
    where
        J: Strategy<S>,
    {
        Secret::new(self.inner_secret)
    }

    /// Transform the secret without exposing it
    pub fn map<T, F>(self, f: F) -> Secret<T, crate::WithType>
    where
        F: FnOnce(S) -> T,
    {
        Secret::new(f(self.inner_secret))
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    Self: PeekInterface<S>,
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    Self: PeekInterface<S>,
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

impl<I> FromStr for Secret<String, I>
where
    I: Strategy<String>,
{
    type Err = core::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_string()))
    }
}
