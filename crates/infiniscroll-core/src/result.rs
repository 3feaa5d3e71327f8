use crate::error::ScrollError;

pub type ScrollResult<T> = Result<T, ScrollError>;
