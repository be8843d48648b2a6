//! A generator that always returns the same response.

use crate::{
    CancelToken, GenerateRequest, GenerateResponse, GeneratedPuzzle, GenerationError,
    GridGenerator,
};

/// Replays a pre-built [`GenerateResponse`] for every request.
///
/// Useful for demos and for driving the rest of the stack in tests.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: GenerateResponse,
}

impl FixedGenerator {
    /// Creates a generator that answers with `response`.
    #[must_use]
    pub fn new(response: GenerateResponse) -> Self {
        Self { response }
    }

    /// Creates a generator that answers with `puzzle`.
    #[must_use]
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        Self::new(GenerateResponse::from_puzzle(puzzle))
    }

    /// Creates a generator that always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(GenerateResponse::Failure {
            error: message.into(),
        })
    }
}

impl GridGenerator for FixedGenerator {
    fn generate(
        &self,
        request: &GenerateRequest,
        cancel: &CancelToken,
    ) -> Result<GeneratedPuzzle, GenerationError> {
        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }
        log::debug!(
            "fixed generator answering {}x{} request for {}",
            request.width,
            request.height,
            request.words
        );
        self.response.clone().into_puzzle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_and_cancelled() {
        let request = GenerateRequest::new(["SUN"], 3, 3);
        let generator = FixedGenerator::failing("nope");
        let err = generator.generate(&request, &CancelToken::new()).unwrap_err();
        assert!(err.is_service());

        let cancel = CancelToken::new();
        cancel.cancel();
        let generator = FixedGenerator::new(GenerateResponse::Success {
            grid: "S U N".to_owned(),
            solution: Vec::new(),
        });
        assert!(generator.generate(&request, &cancel).unwrap_err().is_cancelled());
    }
}
