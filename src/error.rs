use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("unknown series index {0}")]
    UnknownSeries(usize),

    #[error("render item for series {series_index} at data index {data_index} failed: {message}")]
    RenderItem {
        series_index: usize,
        data_index: usize,
        message: String,
    },
}
