use crate::error::BoardifyError;

pub type BoardifyResult<T> = Result<T, BoardifyError>;
