//! Entry point for the WASM application

pub fn main() {
    transeffex_site::start();
}
