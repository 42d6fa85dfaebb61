//! Integration tests exercising the engine against the built-in catalog.


#[cfg(test)]
mod timeout;
