use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path cache capacity must be at least 1")]
pub struct ZeroCapacityError;
