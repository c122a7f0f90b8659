//! Queries against the public modpacks.ch API.

pub mod all;
pub mod pack;
pub mod version;

fn modpack_endpoint(base_url: &str) -> crate::Builder {
    crate::Builder::new(base_url)
        .segment("public")
        .segment("modpack")
}
