// Adapters layer: concrete candidate sources behind the `CandidateSource`
// port (replay list, line-delimited reader, keyboard-wedge byte stream).

pub mod line_source;
pub mod replay;
pub mod wedge_source;

pub use line_source::LineSource;
pub use replay::ReplaySource;
pub use wedge_source::WedgeSource;
