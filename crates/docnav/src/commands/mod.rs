//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod resolve;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use resolve::ResolveArgs;
