use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to lock shared state: poisoned"))]
    LockPoisoned,

    #[snafu(display("Unknown route: {path:?}"))]
    UnknownRoute { path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
