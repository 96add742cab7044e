pub use crate::{point, points};
pub use crate::{
    error::{
        Error, ParseShareError, ParseShareResult, ReconstructError,
        ReconstructResult,
    },
    interpolate::Interpolator,
    point::Point,
    radix::parse_in_radix,
};
