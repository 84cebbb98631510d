mod common;
mod gates;
