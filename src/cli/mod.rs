pub(crate) mod args;

pub(crate) use args::{Cli, ColorMode, SortOrder};
