use thiserror::Error;

/// sdl2 reports most failures as strings or one-off error types; they're all
/// flattened into a message here.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl video: {0}")]
    Video(String),

    #[error("sdl audio: {0}")]
    Audio(String),
}
