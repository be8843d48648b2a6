//! Background grid generation.
//!
//! Each request runs a [`GridGenerator`] on its own thread and reports back
//! through a oneshot channel. A [`GenerationJob`] can be polled from a UI
//! loop, awaited, or driven to completion with [`block_on`].

use std::{
    fmt,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    thread,
};

use futures_channel::oneshot;
use portable_atomic::AtomicU64;
use wordsearch_generator::{
    CancelToken, GenerateRequest, GeneratedPuzzle, GenerationError, GridGenerator,
};

pub use self::executor::block_on;

mod executor;

/// Identifies one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct Ticket(u64);

impl Ticket {
    fn next() -> Self {
        static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_TICKET.fetch_add(1, portable_atomic::Ordering::Relaxed))
    }
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WorkError {
    #[display("failed to start generation thread: {message}")]
    SpawnFailed { message: String },
    #[display("worker disconnected")]
    WorkerDisconnected,
}

type JobResult = Result<GeneratedPuzzle, GenerationError>;

/// Runs generation requests in the background.
#[derive(Clone)]
pub struct GenerationWorker {
    generator: Arc<dyn GridGenerator>,
}

impl fmt::Debug for GenerationWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationWorker").finish_non_exhaustive()
    }
}

impl GenerationWorker {
    #[must_use]
    pub fn new(generator: Arc<dyn GridGenerator>) -> Self {
        Self { generator }
    }

    /// Starts generating `request` on a new thread.
    ///
    /// A thread that cannot be started yields a job that is already failed.
    #[must_use]
    pub fn submit(&self, request: GenerateRequest) -> GenerationJob {
        let ticket = Ticket::next();
        let cancel = CancelToken::new();
        let (sender, receiver) = oneshot::channel::<JobResult>();

        let generator = Arc::clone(&self.generator);
        let token = cancel.clone();
        let spawned = thread::Builder::new()
            .name(format!("wordsearch-generate-{}", ticket.0))
            .spawn(move || {
                let result = generator.generate(&request, &token);
                if sender.send(result).is_err() {
                    log::debug!("generation {ticket} finished after its job was dropped");
                }
            });

        log::debug!("submitted generation {ticket}");
        match spawned {
            Ok(_) => GenerationJob {
                ticket,
                cancel,
                receiver: Some(receiver),
                failed: None,
            },
            Err(err) => GenerationJob {
                ticket,
                cancel,
                receiver: None,
                failed: Some(WorkError::SpawnFailed {
                    message: err.to_string(),
                }),
            },
        }
    }
}

/// A pending generation request.
///
/// Dropping the job cancels the request.
#[derive(Debug)]
pub struct GenerationJob {
    ticket: Ticket,
    cancel: CancelToken,
    receiver: Option<oneshot::Receiver<JobResult>>,
    failed: Option<WorkError>,
}

impl GenerationJob {
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Asks the generator to stop. A result may still arrive afterwards.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Attempts to take the finished result without blocking.
    pub fn poll(&mut self) -> Result<Option<JobResult>, WorkError> {
        if let Some(err) = self.failed.take() {
            return Err(err);
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return Err(WorkError::WorkerDisconnected);
        };
        match receiver.try_recv() {
            Ok(Some(result)) => {
                self.receiver = None;
                Ok(Some(result))
            }
            Ok(None) => Ok(None),
            Err(oneshot::Canceled) => Err(WorkError::WorkerDisconnected),
        }
    }
}

impl Future for GenerationJob {
    type Output = Result<JobResult, WorkError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(err) = self.failed.take() {
            return Poll::Ready(Err(err));
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(Err(WorkError::WorkerDisconnected));
        };
        match Pin::new(receiver).poll(cx) {
            Poll::Ready(Ok(result)) => {
                self.receiver = None;
                Poll::Ready(Ok(result))
            }
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(WorkError::WorkerDisconnected)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for GenerationJob {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wordsearch_generator::{FixedGenerator, GenerateResponse};

    use super::*;

    fn fixed() -> GenerationWorker {
        GenerationWorker::new(Arc::new(FixedGenerator::new(GenerateResponse::Success {
            grid: "S U N\nA B C".to_owned(),
            solution: Vec::new(),
        })))
    }

    /// Waits until the generator has been asked to stop.
    struct Stubborn;

    impl GridGenerator for Stubborn {
        fn generate(
            &self,
            _request: &GenerateRequest,
            cancel: &CancelToken,
        ) -> Result<GeneratedPuzzle, GenerationError> {
            while !cancel.is_cancelled() {
                thread::sleep(Duration::from_millis(1));
            }
            Err(GenerationError::Cancelled)
        }
    }

    #[test]
    fn test_tickets_are_unique() {
        let worker = fixed();
        let a = worker.submit(GenerateRequest::new(["SUN"], 3, 2));
        let b = worker.submit(GenerateRequest::new(["SUN"], 3, 2));
        assert_ne!(a.ticket(), b.ticket());
    }

    #[test]
    fn test_block_on_job() {
        let worker = fixed();
        let job = worker.submit(GenerateRequest::new(["SUN"], 3, 2));
        let puzzle = block_on(job).unwrap().unwrap();
        assert_eq!(puzzle.grid.to_string(), "SUN\nABC");
    }

    #[test]
    fn test_poll_until_ready() {
        let worker = fixed();
        let mut job = worker.submit(GenerateRequest::new(["SUN"], 3, 2));
        let result = loop {
            if let Some(result) = job.poll().unwrap() {
                break result;
            }
            thread::sleep(Duration::from_millis(1));
        };
        assert!(result.is_ok());
        // The result is handed out once.
        assert_eq!(job.poll().unwrap_err(), WorkError::WorkerDisconnected);
    }

    #[test]
    fn test_cancel_reaches_generator() {
        let worker = GenerationWorker::new(Arc::new(Stubborn));
        let job = worker.submit(GenerateRequest::new(["SUN"], 3, 2));
        job.cancel();
        let result = block_on(job).unwrap();
        assert!(result.unwrap_err().is_cancelled());
    }
}
