pub mod drag;

#[cfg(test)]
mod drag_test;
