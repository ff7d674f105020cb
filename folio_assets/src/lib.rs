//! Files from the `assets` directory, embedded at compile time.
//!
//! Every file becomes a constant named after the file in screaming snake
//! case (`content.toml` becomes `CONTENT_TOML`), every directory a module.
//! Text files are `&str`, anything else is `&[u8]`.

include!(env!("ASSETS"));
