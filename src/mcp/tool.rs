//! Common shape of the tool implementations
//!
//! Each tool takes its deserialized arguments and always produces text; failures
//! are rendered as `Error: ...` strings rather than protocol errors.

pub trait Tool {
    type Args;

    fn execute(&self, args: Self::Args) -> impl Future<Output = String> + Send;
}
