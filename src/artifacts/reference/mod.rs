//! Repository references and their on-disk location
//!
//! A repository reference is either URL form (`scheme://[user@]host[:port]/path[.git]`)
//! or SCP-like form (`[user@]host:path[.git]`). Both resolve to
//! `<root>/<host>/<path segments>/<basename>` with authentication info, port,
//! leading `~` and the trailing `.git` removed.
//!
//! Everything in this module is a pure function over strings.

pub mod error;
pub mod repository_reference;
pub mod resolver;

/// Scheme-based URL: scheme, then `//`, then the authority up to the first `/`, `?` or `#`
pub const SCHEME_URL_REGEX: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://(?P<netloc>[^/?#]*)(?P<path>[^?#]*)";
pub const GIT_SUFFIX: &str = ".git";
pub const HOME_PREFIX: char = '~';
