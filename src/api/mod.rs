pub mod deepseek;
pub mod types;

pub use deepseek::DeepSeekClient;

/// Anything that can turn a prompt into a joke
#[allow(async_fn_in_trait)]
pub trait JokeClient {
    async fn tell(&self, prompt: &str) -> crate::error::Result<String>;
}
