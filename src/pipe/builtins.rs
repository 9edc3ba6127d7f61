use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;

/// Parses a path segment into an integer identifier
#[derive(Clone, Copy, Default)]
pub struct ParseIntPipe;

#[async_trait]
impl Pipe for ParseIntPipe {
    type Input = String;
    type Output = i32;

    async fn transform(&self, input: String) -> PipeResult<i32> {
        input
            .trim()
            .parse::<i32>()
            .map_err(|_| PipeError::Validation("numeric string is expected".to_string()))
    }
}
