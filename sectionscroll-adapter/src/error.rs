use sectionscroll::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no gutter is configured on the {0} side")]
    MissingGutter(Side),
    #[error("a {0} gutter resize is already in progress")]
    ResizeInProgress(Side),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
