pub mod inline;

#[cfg(test)]
mod tests;
