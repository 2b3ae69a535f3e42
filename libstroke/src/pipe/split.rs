use super::Pipe;
use crate::Error;

/// Duplicates its input so one copy can be consumed on the side.
#[derive(Debug)]
pub struct CloneSplit<T>(std::marker::PhantomData<T>);

impl<T> CloneSplit<T> {
    pub fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T> Default for CloneSplit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Pipe for CloneSplit<T> {
    type Input = T;
    type Output = (T, T);
    type Error = Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        Ok(Some((input.clone(), input)))
    }
}

/// Runs the left half of a pair through a sink and passes the right half on.
#[derive(Debug)]
pub struct ConsumeLeft<C, T> {
    consumer: C,
    _s: std::marker::PhantomData<T>,
}

impl<C, T> ConsumeLeft<C, T> {
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            _s: std::marker::PhantomData,
        }
    }
}

impl<C, T> Pipe for ConsumeLeft<C, T>
where
    C: Pipe<Output = ()>,
{
    type Input = (C::Input, T);
    type Output = T;
    type Error = C::Error;

    fn process(&mut self, (left, right): Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        self.consumer.process(left)?;
        Ok(Some(right))
    }

    fn close(&mut self) {
        // sinks may hold buffered output until closed
        self.consumer.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::Producer;

    #[derive(Default)]
    struct Sink {
        seen: Vec<u32>,
        closed: bool,
    }

    impl Pipe for &mut Sink {
        type Input = u32;
        type Output = ();
        type Error = Error;

        fn process(&mut self, input: u32) -> Result<Option<()>, Error> {
            self.seen.push(input);
            Ok(Some(()))
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn sink_sees_left_and_is_closed() {
        let mut sink = Sink::default();
        let mut pipes = vec![1u32, 2, 3]
            .into_iter()
            .feed(CloneSplit::new().pipe(ConsumeLeft::new(&mut sink)));
        let right = std::iter::from_fn(|| pipes.produce())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        drop(pipes);
        assert_eq!(right, vec![1, 2, 3]);
        assert_eq!(sink.seen, vec![1, 2, 3]);
        assert!(sink.closed);
    }
}
