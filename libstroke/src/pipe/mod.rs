//! Push based processing stages.
//!
//! A [`Pipe`] turns one input into zero or one output, a [`Producer`] pulls
//! items out of a source. Feeding a producer into a pipe gives a new
//! producer of `Result`s, so stages compose from the svg event stream up to
//! the serializer.

mod chained;
mod split;
pub use chained::ChainedPipe;
pub use split::{CloneSplit, ConsumeLeft};

pub trait Pipe {
    type Input;
    type Output;

    type Error;

    /// `Ok(None)` means the input was absorbed without producing anything yet.
    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error>;

    fn pipe<P>(self, other: P) -> ChainedPipe<Self, P, Self::Output, Self::Error>
    where
        Self: Sized,
        P: Pipe<Input = Self::Output, Error = Self::Error>,
    {
        ChainedPipe::new(self, other)
    }

    /// Called once the feeding producer is exhausted.
    fn close(&mut self) {}
}

/// Drains a producer of results into a collection, stopping at the first error.
#[derive(Debug)]
pub struct TryCollector<P, C> {
    _s: std::marker::PhantomData<(P, C)>,
}

impl<P, C> TryCollector<P, C> {
    pub fn new() -> Self {
        Self {
            _s: std::marker::PhantomData,
        }
    }
}

impl<P, C> Default for TryCollector<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E, P, C> Pipe for TryCollector<P, C>
where
    P: Producer<Item = Result<O, E>>,
    C: FromIterator<O>,
{
    type Input = P;
    type Output = C;
    type Error = E;

    fn process(&mut self, mut input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        std::iter::from_fn(|| input.produce())
            .collect::<Result<C, E>>()
            .map(Some)
    }
}

/// Producer yielding a whole producer once, see [`Producer::producer`].
#[derive(Debug)]
pub struct OwnedProducer<P>(Option<P>);

impl<P: Producer> Producer for OwnedProducer<P> {
    type Item = P;

    fn produce(&mut self) -> Option<Self::Item> {
        self.0.take()
    }
}

pub trait Producer {
    type Item;

    fn produce(&mut self) -> Option<Self::Item>;

    fn producer(self) -> OwnedProducer<Self>
    where
        Self: Sized,
    {
        OwnedProducer(Some(self))
    }

    fn feed<P>(self, other: P) -> ChainedPipe<Self, P, Self::Item, P::Error>
    where
        Self: Sized,
        P: Pipe<Input = Self::Item>,
    {
        ChainedPipe::new(self, other)
    }
}

impl<T> Producer for T
where
    T: Iterator,
{
    type Item = <T as Iterator>::Item;

    fn produce(&mut self) -> Option<Self::Item> {
        <Self as Iterator>::next(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Halve;

    impl Pipe for Halve {
        type Input = u32;
        type Output = u32;
        type Error = String;

        fn process(&mut self, input: u32) -> Result<Option<u32>, String> {
            match input {
                n if n % 2 == 1 => Ok(None),
                n if n > 12 => Err(format!("{input} is too large")),
                n => Ok(Some(n / 2)),
            }
        }
    }

    #[test]
    fn feed_skips_absorbed_inputs() {
        // odd values are absorbed at either stage
        let mut pipes = (0..=8).feed(Halve.pipe(Halve));
        let out: Vec<_> = std::iter::from_fn(|| pipes.produce()).collect();
        assert_eq!(out, vec![Ok(0), Ok(1), Ok(2)]);
    }

    #[test]
    fn try_collector_stops_at_error() {
        let mut pipes = vec![2, 4, 14, 6]
            .into_iter()
            .feed(Halve)
            .producer()
            .feed(TryCollector::<_, Vec<u32>>::new());
        assert_eq!(
            pipes.produce(),
            Some(Err("14 is too large".to_string()))
        );

        let mut pipes = vec![2, 4, 6]
            .into_iter()
            .feed(Halve)
            .producer()
            .feed(TryCollector::<_, Vec<u32>>::new());
        assert_eq!(pipes.produce(), Some(Ok(vec![1, 2, 3])));
    }
}
