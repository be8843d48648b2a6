//! A generator backed by an external program.

use std::{
    ffi::OsString,
    io::{self, Read, Write as _},
    process::{Child, Command, Stdio},
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    CancelToken, GenerateRequest, GenerateResponse, GeneratedPuzzle, GenerationError,
    GridGenerator,
};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs an external program for every request.
///
/// The request is written to the program's stdin as one JSON document, and
/// stdin is then closed. The program must print one [`GenerateResponse`]
/// document to stdout and exit successfully. Cancelling the token kills the
/// process.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: OsString,
    args: Vec<OsString>,
    poll_interval: Duration,
}

impl CommandGenerator {
    /// Creates a generator running `program` without arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Appends several command-line arguments.
    #[must_use]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets how often the running process is checked for exit and cancellation.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn spawn(&self, payload: &[u8]) -> Result<Child, GenerationError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        // A program that exits without reading its input is judged by its output.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(err) = stdin.write_all(payload)
            && err.kind() != io::ErrorKind::BrokenPipe
        {
            let _ = child.kill();
            let _ = child.wait();
            return Err(err.into());
        }
        Ok(child)
    }
}

impl GridGenerator for CommandGenerator {
    fn generate(
        &self,
        request: &GenerateRequest,
        cancel: &CancelToken,
    ) -> Result<GeneratedPuzzle, GenerationError> {
        log::debug!(
            "running generator {:?} for {}x{}",
            self.program,
            request.width,
            request.height
        );
        let payload = serde_json::to_vec(request)?;
        let mut child = self.spawn(&payload)?;
        let stdout = child.stdout.take().map(read_to_end);
        let stderr = child.stderr.take().map(read_to_end);

        let status = loop {
            if cancel.is_cancelled() {
                log::debug!("killing cancelled generator {:?}", self.program);
                let _ = child.kill();
                let _ = child.wait();
                return Err(GenerationError::Cancelled);
            }
            match child.try_wait()? {
                Some(status) => break status,
                None => thread::sleep(self.poll_interval),
            }
        };

        let stdout = join_output(stdout)?;
        let stderr = join_output(stderr)?;
        if !status.success() {
            return Err(GenerationError::Exited {
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_owned(),
            });
        }
        let response: GenerateResponse = serde_json::from_slice(&stdout)?;
        response.into_puzzle()
    }
}

fn read_to_end<R>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_output(
    handle: Option<JoinHandle<io::Result<Vec<u8>>>>,
) -> Result<Vec<u8>, GenerationError> {
    let Some(handle) = handle else {
        return Ok(Vec::new());
    };
    match handle.join() {
        Ok(result) => Ok(result?),
        Err(_) => Err(io::Error::other("output reader panicked").into()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Instant;

    use super::*;

    fn shell(script: &str) -> CommandGenerator {
        CommandGenerator::new("sh")
            .args(["-c", script])
            .poll_interval(Duration::from_millis(5))
    }

    #[test]
    fn test_successful_run() {
        let generator = shell(
            r#"cat > /dev/null; printf '%s' '{"grid":"S U N\nA B C","solution":[{"word":"SUN","position":{"x":0,"y":0,"direction":{"dx":1,"dy":0}}}]}'"#,
        );
        let request = GenerateRequest::new(["SUN"], 3, 2);
        let puzzle = generator.generate(&request, &CancelToken::new()).unwrap();
        assert_eq!(puzzle.grid.to_string(), "SUN\nABC");
        assert_eq!(puzzle.solution.len(), 1);
    }

    #[test]
    fn test_request_is_sent_on_stdin() {
        // Echo the request back as the error message.
        let generator = shell(r#"printf '{"error":%s}' "$(cat | sed 's/"/\\"/g; s/^/"/; s/$/"/')""#);
        let request = GenerateRequest::new(["SUN", "MOON"], 4, 4);
        let err = generator.generate(&request, &CancelToken::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"{"words":"SUN,MOON","width":4,"height":4}"#
        );
    }

    #[test]
    fn test_program_ignoring_large_input() {
        // More than a pipe buffer, so the write fails once the program exits.
        let words: Vec<String> = (0..20_000).map(|i| format!("WORD{i}")).collect();
        let request = GenerateRequest::new(words.iter().map(String::as_str), 50, 50);
        let err = shell(r#"printf '%s' '{"error":"too many words"}'"#)
            .generate(&request, &CancelToken::new())
            .unwrap_err();
        assert!(matches!(&err, GenerationError::Service { message } if message == "too many words"));
    }

    #[test]
    fn test_failures() {
        let request = GenerateRequest::new(["SUN"], 3, 3);
        let cancel = CancelToken::new();

        let err = shell("cat > /dev/null; echo boom >&2; exit 3")
            .generate(&request, &cancel)
            .unwrap_err();
        assert!(matches!(&err, GenerationError::Exited { stderr, .. } if stderr == "boom"));

        let err = shell("cat > /dev/null; echo not json")
            .generate(&request, &cancel)
            .unwrap_err();
        assert!(err.is_json());

        let err = CommandGenerator::new("/nonexistent/wordsearch-generator")
            .generate(&request, &cancel)
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_cancel_kills_process() {
        let generator = shell("sleep 10");
        let request = GenerateRequest::new(["SUN"], 3, 3);
        let cancel = CancelToken::new();

        let trigger = cancel.clone();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            trigger.cancel();
        });

        let started = Instant::now();
        let err = generator.generate(&request, &cancel).unwrap_err();
        canceller.join().unwrap();
        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
