use std::future::Future;

/// Schedules the next frame of the loop.
///
/// `tick` resolves once the next frame may run and yields `false` when the
/// loop should stop. Stopping is cooperative: the frame in flight always
/// finishes before the ticker is asked again.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = bool>;
}

/// Ticks immediately, never stops on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl Ticker for Unpaced {
    fn tick(&mut self) -> impl Future<Output = bool> {
        std::future::ready(true)
    }
}

/// Wraps another ticker and stops the loop after a fixed number of frames.
/// The loop always draws at least one frame, so a limit of 0 behaves like 1.
#[derive(Debug)]
pub struct FrameLimit<T> {
    inner: T,
    frames_left: u64,
}

impl<T: Ticker> FrameLimit<T> {
    pub fn new(inner: T, frames: u64) -> Self {
        Self { inner, frames_left: frames }
    }
}

impl<T: Ticker> Ticker for FrameLimit<T> {
    fn tick(&mut self) -> impl Future<Output = bool> {
        async move {
            self.frames_left = self.frames_left.saturating_sub(1);
            if self.frames_left == 0 {
                return false;
            }
            self.inner.tick().await
        }
    }
}
