use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("a graph needs at least one vertex")]
    EmptyGraph,
    #[error("{requested} vertices exceeds the limit of {limit}")]
    TooManyVertices { requested: usize, limit: usize },
    #[error("vertex {vertex} is outside 1..={num_vertices}")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    #[error("graph file has no vertex count line")]
    MissingHeader,
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
