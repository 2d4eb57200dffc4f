mod common;
mod patterns;
mod routing;
