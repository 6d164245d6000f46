#[macro_export]
macro_rules! profile {
  ($name:expr) => {{
    let _span = tracing::span!(tracing::Level::DEBUG, $name);
    let _enter = _span.enter();
  }};
}

pub mod branch;
pub mod config;
pub mod filesystem;
pub mod github;
pub mod hook;
