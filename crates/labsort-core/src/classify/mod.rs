pub mod mixture;
pub mod outcome;
pub mod substance;

pub use mixture::{analyze_mixture, analyze_mixture_with};
pub use outcome::{Classification, DisposalDetails, MixtureBranch, MixtureResult, ReasonParam};
pub use substance::classify_substance;
