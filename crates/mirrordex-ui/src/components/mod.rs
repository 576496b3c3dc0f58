pub(crate) mod atoms;
pub(crate) mod browser;
pub(crate) mod not_found;
pub(crate) mod shell;
pub(crate) mod urls;
